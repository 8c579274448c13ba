use axum::{
    Extension, Json,
    extract::{Path, State},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter,
};
use serde::Deserialize;

use crate::{
    entity::{prelude::*, review},
    error::ApiError,
    middleware::jwt::AppUser,
    state::AppState,
};

#[derive(Clone, Deserialize, Debug)]
pub struct UpdateMyReviewBody {
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

/// Partial edit of the caller's own review; 404 when there is none yet.
#[tracing::instrument(name = "PUT /articles/{article_id}/reviews/me", skip(state, user, body))]
pub async fn update_my_review(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(article_id): Path<i32>,
    Json(body): Json<UpdateMyReviewBody>,
) -> Result<Json<review::Model>, ApiError> {
    let user_id = user.user_id()?;

    if let Some(rating) = body.rating {
        if !(1..=5).contains(&rating) {
            return Err(ApiError::bad_request("rating must be an integer from 1 to 5"));
        }
    }

    let existing = Review::find()
        .filter(review::Column::ArticleId.eq(article_id))
        .filter(review::Column::UserId.eq(user_id))
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("No review yet, use the create endpoint"))?;

    let mut active = existing.into_active_model();
    if let Some(rating) = body.rating {
        active.rating = Set(rating);
    }
    if let Some(comment) = body.comment {
        active.comment = Set(Some(comment));
    }

    let updated = active.update(&state.db).await?;
    Ok(Json(updated))
}
