mod error;
pub mod cat;
mod store;

use std::sync::Arc;
use tokio::sync::RwLock;

pub use self::error::{Error, Result, MSG_CAT_NOT_FOUND};
pub use self::store::CatStore;

#[derive(Clone, Default)]
pub struct ModelManager {
    store: Arc<RwLock<CatStore>>,
}

impl ModelManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: CatStore) -> Self {
        ModelManager {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub(in crate::model) fn store(&self) -> &RwLock<CatStore> {
        &self.store
    }
}
