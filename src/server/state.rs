use crate::db::Store;

/// Shared, immutable handler state. Holds only where the database lives;
/// connections are opened per request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Store,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}
