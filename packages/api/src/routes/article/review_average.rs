use axum::{
    Json,
    extract::{Path, State},
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::Serialize;

use crate::{
    aggregate::{LIST_PRECISION, RatingSummary},
    entity::{prelude::*, review},
    error::ApiError,
    state::AppState,
};

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ArticleAverage {
    pub article_id: i32,
    pub count: u64,
    pub average: Option<f64>,
}

#[tracing::instrument(name = "GET /articles/{article_id}/reviews/average", skip(state))]
pub async fn review_average(
    State(state): State<AppState>,
    Path(article_id): Path<i32>,
) -> Result<Json<ArticleAverage>, ApiError> {
    let ratings: Vec<i32> = Review::find()
        .filter(review::Column::ArticleId.eq(article_id))
        .all(&state.db)
        .await?
        .iter()
        .map(|r| r.rating)
        .collect();

    let summary = RatingSummary::from_values(&ratings, LIST_PRECISION);

    Ok(Json(ArticleAverage {
        article_id,
        count: summary.count,
        average: summary.average,
    }))
}
