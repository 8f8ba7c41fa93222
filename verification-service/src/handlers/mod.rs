pub mod health;
pub mod sentiment;
pub mod speech;
pub mod verification;
pub mod video;

pub use health::{health_check, metrics_endpoint, welcome};
pub use sentiment::analyze_sentiment;
pub use speech::speech_to_text;
pub use verification::verify_document;
pub use video::video_response_analysis;
