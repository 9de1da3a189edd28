//! Route definitions for the breakdown endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::census;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET /location/    -> location_breakdown  (harvests first)
/// GET /gender/      -> gender_breakdown
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/location/", get(census::location_breakdown))
        .route("/gender/", get(census::gender_breakdown))
}
