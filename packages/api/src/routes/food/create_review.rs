use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, SqlErr, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::{
    entity::{comment, rating},
    error::ApiError,
    middleware::jwt::AppUser,
    state::AppState,
};

#[derive(Clone, Deserialize, Debug)]
pub struct CreateReviewBody {
    pub value: Option<i32>,
    pub content: Option<String>,
}

#[derive(Clone, Serialize, Debug)]
pub struct ReviewPair {
    pub rating: rating::Model,
    pub comment: Option<comment::Model>,
}

/// First submission of a rating (and optionally a comment) for a food.
///
/// Create-only by design: a caller who already rated this food gets 409
/// and is expected to use the edit endpoint instead. Concurrent first
/// submissions race on the store's (userId, foodId) uniqueness, so the
/// loser lands in the same 409 arm. Rating and comment are written in one
/// transaction; a partial pair never becomes visible.
#[tracing::instrument(name = "POST /foods/{food_id}/reviews", skip(state, user, body))]
pub async fn create_review(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(food_id): Path<i32>,
    Json(body): Json<CreateReviewBody>,
) -> Result<(StatusCode, Json<ReviewPair>), ApiError> {
    let user_id = user.user_id()?;
    let value = body
        .value
        .filter(|v| (1..=5).contains(v))
        .ok_or_else(|| ApiError::bad_request("Rating value must be an integer from 1 to 5"))?;
    let content = body.content.filter(|c| !c.trim().is_empty());

    let pair = state
        .db
        .transaction::<_, ReviewPair, ApiError>(|txn| {
            Box::pin(async move {
                let rating = rating::ActiveModel {
                    value: Set(value),
                    user_id: Set(user_id),
                    food_id: Set(food_id),
                    ..Default::default()
                }
                .insert(txn)
                .await
                .map_err(|err| match err.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => ApiError::conflict(
                        "You already reviewed this food, use the edit endpoint",
                    ),
                    _ => err.into(),
                })?;

                let comment = match content {
                    Some(content) => Some(
                        comment::ActiveModel {
                            content: Set(content),
                            user_id: Set(user_id),
                            food_id: Set(food_id),
                            created_at: Set(chrono::Utc::now().naive_utc()),
                            ..Default::default()
                        }
                        .insert(txn)
                        .await?,
                    ),
                    None => None,
                };

                Ok(ReviewPair { rating, comment })
            })
        })
        .await?;

    Ok((StatusCode::CREATED, Json(pair)))
}
