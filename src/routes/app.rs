use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::aptoide::{build_metadata, AppMetadata};
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub package_name: String,
}

/// Looks up an app on Aptoide and returns its flattened metadata.
///
/// Responds 422 when `package_name` is missing, 404 when the search
/// returns no results, and 500 when Aptoide is unreachable or answers
/// with an error status.
pub async fn get_app_metadata(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<AppMetadata>, AppError> {
    let Query(params) = params.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    tracing::debug!(package_name = %params.package_name, "Fetching app metadata");

    let data = state.search.search(&params.package_name).await?;

    let apps = data.datalist.unwrap_or_default().list;
    let result = apps.into_iter().next().ok_or(AppError::NotFound)?;

    Ok(Json(build_metadata(result)))
}
