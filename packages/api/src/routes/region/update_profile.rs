use axum::{
    Extension, Json,
    extract::{Path, State},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, EntityTrait, IntoActiveModel, SqlErr,
};
use serde::{Deserialize, Serialize};

use crate::{
    entity::prelude::*,
    error::ApiError,
    middleware::jwt::AppUser,
    state::AppState,
};

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileBody {
    pub profile_content: Option<String>,
    pub profile_image_url: Option<String>,
    pub slug: Option<String>,
}

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegionProfile {
    pub id: i32,
    pub name: String,
    pub profile_content: Option<String>,
    pub profile_image_url: Option<String>,
    pub slug: Option<String>,
}

#[tracing::instrument(name = "PUT /regions/{region_id}/profile", skip(state, user, body))]
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(region_id): Path<i32>,
    Json(body): Json<UpdateProfileBody>,
) -> Result<Json<RegionProfile>, ApiError> {
    user.user_id()?;

    let existing = Region::find_by_id(region_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Region not found"))?;

    let mut active = existing.into_active_model();
    if let Some(profile_content) = body.profile_content {
        active.profile_content = Set(Some(profile_content));
    }
    if let Some(profile_image_url) = body.profile_image_url {
        active.profile_image_url = Set(Some(profile_image_url));
    }
    if let Some(slug) = body.slug {
        active.slug = Set(Some(slug));
    }

    let updated = active.update(&state.db).await.map_err(|err| {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                ApiError::conflict("Slug already in use")
            }
            _ => err.into(),
        }
    })?;

    Ok(Json(RegionProfile {
        id: updated.id,
        name: updated.name,
        profile_content: updated.profile_content,
        profile_image_url: updated.profile_image_url,
        slug: updated.slug,
    }))
}
