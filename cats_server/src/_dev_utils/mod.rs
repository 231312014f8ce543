use tokio::sync::OnceCell;
use tracing_subscriber::EnvFilter;

use crate::model::cat::seed_cats;
use crate::model::{CatStore, ModelManager};

/// Installs a test-friendly tracing subscriber, once per process.
pub async fn init_dev() {
    static INIT: OnceCell<()> = OnceCell::const_new();

    INIT.get_or_init(|| async {
        let _ = tracing_subscriber::fmt()
            .with_target(false)
            .with_test_writer()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    })
    .await;
}

/// Fresh model manager holding only the seed cat.
pub async fn init_test() -> ModelManager {
    init_dev().await;
    ModelManager::with_store(CatStore::with_seed(seed_cats()))
}
