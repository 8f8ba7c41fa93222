pub mod analysis;
pub mod metrics;
pub mod scratch;

pub use metrics::{get_metrics, init_metrics};
pub use scratch::ScratchStore;
