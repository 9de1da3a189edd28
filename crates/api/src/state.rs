use std::sync::Arc;

use census_worker::harvester::Harvester;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone; everything non-trivial sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: census_db::DbPool,
    /// Workers run by `GET /location/` before counting.
    pub harvester: Arc<Harvester>,
}
