//! Shared application state for all routes.

use crate::service::StudentStorage;
use std::sync::Arc;

/// One storage handle, cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn StudentStorage>,
}

impl AppState {
    pub fn new<S: StudentStorage + 'static>(storage: S) -> Self {
        AppState {
            storage: Arc::new(storage),
        }
    }
}
