use std::sync::Arc;

use tracing::error;

use bookmart_db::EntityStore;

use crate::error::ApiError;
use crate::password::CredentialHasher;
use crate::uploads::ImageStore;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Box<dyn EntityStore>,
    pub hasher: Box<dyn CredentialHasher>,
    pub images: Box<dyn ImageStore>,
}

impl AppStateInner {
    pub fn new(
        store: impl EntityStore + 'static,
        hasher: impl CredentialHasher + 'static,
        images: impl ImageStore + 'static,
    ) -> AppState {
        Arc::new(Self {
            store: Box::new(store),
            hasher: Box::new(hasher),
            images: Box::new(images),
        })
    }
}

/// Run blocking store work off the async runtime. Any failure inside `f`
/// becomes [`ApiError::Store`] carrying the original message.
pub async fn blocking<F, T>(state: &AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&AppStateInner) -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || f(state.as_ref()))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Internal(e.to_string())
        })?
        .map_err(|e| {
            error!("Store error: {:#}", e);
            ApiError::Store(e.to_string())
        })
}
