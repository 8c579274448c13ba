use axum::{Extension, Json, extract::State};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, IntoActiveModel};
use serde::Deserialize;

use crate::{
    entity::prelude::*,
    error::ApiError,
    middleware::jwt::AppUser,
    routes::user::get_me::Profile,
    state::AppState,
};

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMeBody {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[tracing::instrument(name = "PUT /users/me", skip(state, user, body))]
pub async fn update_me(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Json(body): Json<UpdateMeBody>,
) -> Result<Json<Profile>, ApiError> {
    let user_id = user.user_id()?;

    if body.first_name.is_none() && body.last_name.is_none() {
        return Err(ApiError::bad_request(
            "Nothing to change, supply firstName or lastName",
        ));
    }

    let existing = User::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    let mut active = existing.into_active_model();
    if let Some(first_name) = body.first_name {
        active.first_name = Set(first_name);
    }
    if let Some(last_name) = body.last_name {
        active.last_name = Set(last_name);
    }

    let updated = active.update(&state.db).await?;
    Ok(Json(Profile::from(updated)))
}
