use std::path::PathBuf;
use uuid::Uuid;
use verification_service::config::VerificationConfig;
use verification_service::startup::Application;

pub struct TestApp {
    pub address: String,
    pub scratch_dir: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let scratch_dir = format!("target/test-scratch-{}", Uuid::new_v4());

        let mut config = VerificationConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.scratch.dir = scratch_dir.clone();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            scratch_dir,
        }
    }

    /// Path an upload with this filename would be spooled to.
    #[allow(dead_code)]
    pub fn scratch_path(&self, filename: &str) -> PathBuf {
        PathBuf::from(&self.scratch_dir).join(filename)
    }

    /// Cleanup test resources (scratch directory).
    pub async fn cleanup(&self) {
        let _ = tokio::fs::remove_dir_all(&self.scratch_dir).await;
    }
}
