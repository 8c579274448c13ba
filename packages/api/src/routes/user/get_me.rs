use axum::{Extension, Json, extract::State};
use sea_orm::EntityTrait;
use serde::Serialize;

use crate::{
    entity::prelude::*,
    error::ApiError,
    middleware::jwt::AppUser,
    state::AppState,
};

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: chrono::NaiveDateTime,
}

impl From<crate::entity::user::Model> for Profile {
    fn from(user: crate::entity::user::Model) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[tracing::instrument(name = "GET /users/me", skip(state, user))]
pub async fn get_me(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
) -> Result<Json<Profile>, ApiError> {
    let user_id = user.user_id()?;

    let profile = User::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(Profile::from(profile)))
}
