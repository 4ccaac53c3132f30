use std::sync::Arc;
use user_directory::directory::UserDirectory;

pub mod client;

pub struct TestContext {
    pub dir: Arc<UserDirectory>,
}

impl TestContext {
    /// Directory populated with the 5-user fixture.
    pub fn seeded() -> TestContext {
        TestContext {
            dir: Arc::new(UserDirectory::seeded()),
        }
    }

    #[allow(dead_code)]
    pub fn empty() -> TestContext {
        TestContext {
            dir: Arc::new(UserDirectory::new()),
        }
    }
}
