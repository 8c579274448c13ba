use axum::{
    Extension, Json,
    extract::{Path, State},
};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, IntoActiveModel};
use serde::Deserialize;

use crate::{
    entity::{food, prelude::*},
    error::ApiError,
    middleware::jwt::AppUser,
    routes::food::create_food::Geo,
    state::AppState,
};

/// Partial update: absent fields stay untouched.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFoodBody {
    pub name: Option<String>,
    pub region_id: Option<i32>,
    pub city_name: Option<String>,
    pub intro: Option<String>,
    pub body: Option<String>,
    pub image_url: Option<String>,
    pub article_id: Option<i32>,
    pub geo: Option<Geo>,
}

#[tracing::instrument(name = "PUT /foods/{food_id}", skip(state, user, body))]
pub async fn update_food(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Path(food_id): Path<i32>,
    Json(body): Json<UpdateFoodBody>,
) -> Result<Json<food::Model>, ApiError> {
    user.user_id()?;

    let existing = Food::find_by_id(food_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Food not found"))?;

    let mut active = existing.into_active_model();
    if let Some(name) = body.name {
        active.name = Set(name);
    }
    if let Some(region_id) = body.region_id {
        active.region_id = Set(region_id);
    }
    if let Some(city_name) = body.city_name {
        active.city_name = Set(Some(city_name));
    }
    if let Some(intro) = body.intro {
        active.intro = Set(Some(intro));
    }
    if let Some(text) = body.body {
        active.body = Set(Some(text));
    }
    if let Some(image_url) = body.image_url {
        active.image_url = Set(Some(image_url));
    }
    if let Some(article_id) = body.article_id {
        active.article_id = Set(Some(article_id));
    }
    if let Some(geo) = body.geo {
        if let Some(lat) = geo.lat {
            active.latitude = Set(Some(lat));
        }
        if let Some(lng) = geo.lng {
            active.longitude = Set(Some(lng));
        }
    }
    active.updated_at = Set(chrono::Utc::now().naive_utc());

    let updated = active.update(&state.db).await?;
    Ok(Json(updated))
}
