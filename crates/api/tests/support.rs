use std::sync::{Arc, Mutex};

use hubcard_domain::{Config, ProfileRecord};
use hubcard_lib::{AppContext, ProfileView};
use tempfile::TempDir;
use wiremock::MockServer;

/// Shared context for integration tests that drive a full lookup against a
/// mock GitHub server and a fresh cache database.
pub struct TestContext {
    pub ctx: Arc<AppContext>,
    pub server: MockServer,
    /// Keep temporary directory alive for the lifetime of the context.
    _temp_dir: TempDir,
}

/// Create a new test context with fresh database state.
pub async fn setup_test_context() -> TestContext {
    let temp_dir = TempDir::new().expect("failed to create temporary database directory");
    let db_path = temp_dir.path().join("hubcard.db");

    let server = MockServer::start().await;

    let mut config = Config::default();
    config.database.path = db_path.to_string_lossy().into_owned();
    config.github.api_base = server.uri();

    let ctx = Arc::new(AppContext::new_with_config(config).expect("failed to build app context"));

    TestContext { ctx, server, _temp_dir: temp_dir }
}

/// View that records every progress event for assertions.
#[derive(Default)]
pub struct CapturingView {
    events: Mutex<Vec<(u8, Option<u8>)>>,
}

impl CapturingView {
    pub fn events(&self) -> Vec<(u8, Option<u8>)> {
        self.events.lock().expect("events mutex poisoned").clone()
    }
}

impl ProfileView for CapturingView {
    fn render(&self, _record: &ProfileRecord, progress: u8, next: Option<u8>) {
        self.events.lock().expect("events mutex poisoned").push((progress, next));
    }
}
