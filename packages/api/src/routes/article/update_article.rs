use axum::{
    Extension, Json,
    extract::{Path, State},
};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, IntoActiveModel};
use serde::Deserialize;

use crate::{
    entity::{article, prelude::*, sea_orm_active_enums::ArticleType},
    error::ApiError,
    middleware::jwt::AppUser,
    state::AppState,
};

/// Partial update. The slug is deliberately left alone even when the
/// title changes, so published links keep working.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleBody {
    pub title: Option<String>,
    pub content: Option<String>,
    pub r#type: Option<ArticleType>,
    pub region_id: Option<i32>,
    pub cover_image_url: Option<String>,
    pub published_at: Option<chrono::NaiveDateTime>,
}

#[tracing::instrument(name = "PUT /articles/{article_id}", skip(state, user, body))]
pub async fn update_article(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(article_id): Path<i32>,
    Json(body): Json<UpdateArticleBody>,
) -> Result<Json<article::Model>, ApiError> {
    user.user_id()?;

    let existing = Article::find_by_id(article_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Article not found"))?;

    let mut active = existing.into_active_model();
    if let Some(title) = body.title {
        active.title = Set(title);
    }
    if let Some(content) = body.content {
        active.content = Set(content);
    }
    if let Some(article_type) = body.r#type {
        active.r#type = Set(article_type);
    }
    if let Some(region_id) = body.region_id {
        active.region_id = Set(Some(region_id));
    }
    if let Some(cover_image_url) = body.cover_image_url {
        active.cover_image_url = Set(Some(cover_image_url));
    }
    if let Some(published_at) = body.published_at {
        active.published_at = Set(Some(published_at));
    }

    let updated = active.update(&state.db).await?;
    Ok(Json(updated))
}
