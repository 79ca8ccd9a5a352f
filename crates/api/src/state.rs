use std::sync::Arc;

use gg_db::store::Store;

use crate::services::{GearService, GuitaristService, ManufacturerService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Backing store shared by every service.
    pub store: Arc<dyn Store>,
    pub gear: GearService,
    pub guitarists: GuitaristService,
    pub manufacturers: ManufacturerService,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            gear: GearService::new(Arc::clone(&store)),
            guitarists: GuitaristService::new(Arc::clone(&store)),
            manufacturers: ManufacturerService::new(Arc::clone(&store)),
            store,
        }
    }
}
