//! Handlers for the gender × location breakdowns.

use axum::extract::State;
use axum::Json;
use census_core::breakdown::{group_by_gender, GenderCount, GenderGroup};
use census_db::repositories::LocationRepo;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// One location with its person counts split by gender.
#[derive(Debug, Serialize)]
pub struct LocationBreakdown {
    pub location: Option<String>,
    pub gender_count: GenderCount,
}

/// One gender with the locations its persons live in.
///
/// Serializes as `{"Male": [...], "Total": n}`, keyed by the gender's
/// display name.
#[derive(Debug)]
pub struct GenderBreakdown(pub GenderGroup);

impl Serialize for GenderBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let group = &self.0;
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(group.gender.display_name(), &group.locations)?;
        map.serialize_entry("Total", &group.total)?;
        map.end()
    }
}

/// GET /location/
///
/// Runs every worker to pull fresh people from the external APIs, then
/// returns per-location gender counts ordered by location id. A failing
/// worker aborts the request before anything is counted.
pub async fn location_breakdown(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<LocationBreakdown>>> {
    let summaries = state.harvester.run(&state.pool).await?;
    let created: usize = summaries.iter().map(|s| s.persons_created).sum();
    tracing::debug!(created, "Harvest before location breakdown");

    let rows = LocationRepo::gender_counts_by_location(&state.pool).await?;
    let body = rows
        .iter()
        .map(|row| LocationBreakdown {
            location: row.label(),
            gender_count: row.counts(),
        })
        .collect();
    Ok(Json(body))
}

/// GET /gender/
///
/// Returns one entry per gender (male first) listing the locations with
/// persons of that gender and a total. Makes no external calls.
pub async fn gender_breakdown(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<DataResponse<GenderBreakdown>>>> {
    let rows = LocationRepo::location_counts_by_gender(&state.pool).await?;
    let body = group_by_gender(rows.into_iter().map(|r| r.into_tally()))
        .into_iter()
        .map(|group| DataResponse {
            data: GenderBreakdown(group),
        })
        .collect();
    Ok(Json(body))
}
