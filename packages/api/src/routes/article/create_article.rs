use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
};
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use serde::{Deserialize, Serialize};

use crate::{
    entity::{article, sea_orm_active_enums::ArticleType},
    error::ApiError,
    middleware::jwt::AppUser,
    slug::ensure_unique_slug,
    state::AppState,
};

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleBody {
    pub title: Option<String>,
    pub content: Option<String>,
    pub r#type: Option<ArticleType>,
    pub region_id: Option<i32>,
    pub cover_image_url: Option<String>,
    pub published_at: Option<chrono::NaiveDateTime>,
}

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreatedArticle {
    pub id: i32,
    pub title: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub article_type: ArticleType,
    pub region_id: Option<i32>,
    pub cover_image_url: Option<String>,
    pub published_at: Option<chrono::NaiveDateTime>,
}

#[tracing::instrument(name = "POST /articles", skip(state, user, body))]
pub async fn create_article(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Json(body): Json<CreateArticleBody>,
) -> Result<(StatusCode, Json<CreatedArticle>), ApiError> {
    let author_id = user.user_id()?;

    let title = body
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("title and content are required"))?;
    let content = body
        .content
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("title and content are required"))?;
    let article_type = body.r#type.unwrap_or(ArticleType::Story);

    let slug = ensure_unique_slug(&state.db, &title).await?;

    let created = article::ActiveModel {
        title: Set(title),
        slug: Set(slug),
        content: Set(content),
        r#type: Set(article_type),
        region_id: Set(body.region_id),
        cover_image_url: Set(body.cover_image_url),
        published_at: Set(body.published_at),
        author_id: Set(Some(author_id)),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedArticle {
            id: created.id,
            title: created.title,
            slug: created.slug,
            article_type: created.r#type,
            region_id: created.region_id,
            cover_image_url: created.cover_image_url,
            published_at: created.published_at,
        }),
    ))
}
