use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
};
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use serde::Deserialize;

use crate::{
    entity::food,
    error::ApiError,
    middleware::jwt::AppUser,
    state::AppState,
};

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoodBody {
    pub name: Option<String>,
    pub region_id: Option<i32>,
    pub city_name: Option<String>,
    pub intro: Option<String>,
    pub body: Option<String>,
    pub image_url: Option<String>,
    pub article_id: Option<i32>,
    pub geo: Option<Geo>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct Geo {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[tracing::instrument(name = "POST /foods", skip(state, user, body))]
pub async fn create_food(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
    Json(body): Json<CreateFoodBody>,
) -> Result<(StatusCode, Json<food::Model>), ApiError> {
    user.user_id()?;

    let name = body
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("name and regionId are required"))?;
    let region_id = body
        .region_id
        .ok_or_else(|| ApiError::bad_request("name and regionId are required"))?;

    let now = chrono::Utc::now().naive_utc();
    let created = food::ActiveModel {
        name: Set(name),
        region_id: Set(region_id),
        city_name: Set(body.city_name),
        intro: Set(body.intro),
        body: Set(body.body),
        image_url: Set(body.image_url),
        article_id: Set(body.article_id),
        latitude: Set(body.geo.as_ref().and_then(|g| g.lat)),
        longitude: Set(body.geo.as_ref().and_then(|g| g.lng)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(created)))
}
