use axum::{
    Json,
    extract::{Path, State},
};
use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, QueryFilter};
use serde::Serialize;

use crate::{
    aggregate::{LIST_PRECISION, RatingSummary},
    entity::{article, prelude::*, review},
    error::ApiError,
    routes::{UserSummary, food::list_foods::RegionRef},
    state::AppState,
};

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDetail {
    #[serde(flatten)]
    pub article: article::Model,
    pub region: Option<RegionRef>,
    pub author: Option<UserSummary>,
    pub review_summary: ReviewSummary,
}

#[derive(Clone, Serialize, Debug)]
pub struct ReviewSummary {
    pub count: u64,
    pub average: Option<f64>,
}

#[tracing::instrument(name = "GET /articles/{article_id}", skip(state))]
pub async fn get_article(
    State(state): State<AppState>,
    Path(article_id): Path<i32>,
) -> Result<Json<ArticleDetail>, ApiError> {
    let article = Article::find_by_id(article_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Article not found"))?;

    let region = article.find_related(Region).one(&state.db).await?;
    let author = article.find_related(User).one(&state.db).await?;

    let ratings: Vec<i32> = Review::find()
        .filter(review::Column::ArticleId.eq(article_id))
        .all(&state.db)
        .await?
        .iter()
        .map(|r| r.rating)
        .collect();
    let summary = RatingSummary::from_values(&ratings, LIST_PRECISION);

    Ok(Json(ArticleDetail {
        article,
        region: region.map(|r| RegionRef {
            id: r.id,
            name: r.name,
        }),
        author: author.map(UserSummary::from),
        review_summary: ReviewSummary {
            count: summary.count,
            average: summary.average,
        },
    }))
}
