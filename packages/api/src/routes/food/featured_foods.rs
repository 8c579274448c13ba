use axum::{Json, extract::State};
use sea_orm::{DbBackend, FromQueryResult, Statement};
use serde::Serialize;

use crate::{error::ApiError, state::AppState};

#[derive(Clone, Debug, Serialize, FromQueryResult)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedFood {
    pub id: i32,
    pub name: String,
    pub image_url: Option<String>,
    pub region_name: String,
}

/// Three random landing-page picks. Random ordering stays in the store;
/// shuffling a full table fetch in memory would be wasteful.
#[tracing::instrument(name = "GET /foods/featured", skip(state))]
pub async fn featured_foods(
    State(state): State<AppState>,
) -> Result<Json<Vec<FeaturedFood>>, ApiError> {
    let rows = FeaturedFood::find_by_statement(Statement::from_string(
        DbBackend::Postgres,
        r#"
        SELECT f.id, f.name, f."imageUrl" AS image_url, r.name AS region_name
        FROM "public"."Food" f
        JOIN "public"."Region" r ON r.id = f."regionId"
        ORDER BY RANDOM()
        LIMIT 3
        "#,
    ))
    .all(&state.db)
    .await?;

    Ok(Json(rows))
}
