use axum::{
    Extension, Json,
    extract::{Path, State},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter,
    TransactionTrait,
};
use serde::Deserialize;

use crate::{
    entity::{comment, prelude::*, rating},
    error::ApiError,
    middleware::jwt::AppUser,
    routes::food::create_review::ReviewPair,
    state::AppState,
};

#[derive(Clone, Deserialize, Debug)]
pub struct UpdateReviewBody {
    pub value: Option<i32>,
    pub content: Option<String>,
}

/// Edit of an existing review pair. Requires a prior rating (404 points
/// the caller at the create endpoint). The rating update and the comment
/// upsert commit in one transaction; a comment left out of the body is
/// preserved, not cleared.
#[tracing::instrument(name = "PUT /foods/{food_id}/reviews", skip(state, user, body))]
pub async fn update_review(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(food_id): Path<i32>,
    Json(body): Json<UpdateReviewBody>,
) -> Result<Json<ReviewPair>, ApiError> {
    let user_id = user.user_id()?;
    let value = body
        .value
        .filter(|v| (1..=5).contains(v))
        .ok_or_else(|| ApiError::bad_request("Rating value must be an integer from 1 to 5"))?;
    let content = body.content.filter(|c| !c.trim().is_empty());

    let existing = Rating::find()
        .filter(rating::Column::UserId.eq(user_id))
        .filter(rating::Column::FoodId.eq(food_id))
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("No review yet, use the create endpoint"))?;

    let pair = state
        .db
        .transaction::<_, ReviewPair, ApiError>(|txn| {
            Box::pin(async move {
                let mut active = existing.into_active_model();
                active.value = Set(value);
                let rating = active.update(txn).await?;

                let comment = match content {
                    Some(content) => {
                        let stored = Comment::find()
                            .filter(comment::Column::UserId.eq(user_id))
                            .filter(comment::Column::FoodId.eq(food_id))
                            .one(txn)
                            .await?;
                        let comment = match stored {
                            Some(stored) => {
                                let mut active = stored.into_active_model();
                                active.content = Set(content);
                                active.update(txn).await?
                            }
                            None => {
                                comment::ActiveModel {
                                    content: Set(content),
                                    user_id: Set(user_id),
                                    food_id: Set(food_id),
                                    created_at: Set(chrono::Utc::now().naive_utc()),
                                    ..Default::default()
                                }
                                .insert(txn)
                                .await?
                            }
                        };
                        Some(comment)
                    }
                    None => None,
                };

                Ok(ReviewPair { rating, comment })
            })
        })
        .await?;

    Ok(Json(pair))
}
