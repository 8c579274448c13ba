use axum::{
    Json,
    Router,
    extract::State,
    http::StatusCode,
    routing::post,
};
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use serde::{Deserialize, Serialize};

use crate::{entity::suggestion, error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/", post(create_suggestion))
}

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateSuggestionBody {
    pub food_name: Option<String>,
    pub origin: Option<String>,
    pub description: Option<String>,
    pub suggester_name: Option<String>,
}

#[derive(Clone, Serialize, Debug)]
pub struct SuggestionReply {
    pub message: String,
}

#[tracing::instrument(name = "POST /suggestions", skip(state, body))]
pub async fn create_suggestion(
    State(state): State<AppState>,
    Json(body): Json<CreateSuggestionBody>,
) -> Result<(StatusCode, Json<SuggestionReply>), ApiError> {
    let food_name = body
        .food_name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("foodName is required"))?;

    suggestion::ActiveModel {
        food_name: Set(food_name),
        origin: Set(body.origin),
        description: Set(body.description),
        suggester_name: Set(body.suggester_name),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(SuggestionReply {
            message: "Thanks for the suggestion! We will review it soon.".to_string(),
        }),
    ))
}
