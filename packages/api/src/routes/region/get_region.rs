use axum::{
    Json,
    extract::{Path, Query, State},
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{
    entity::{article, prelude::*, restaurant},
    error::ApiError,
    routes::region::{RatedFood, foods_with_average},
    state::AppState,
};

#[derive(Clone, Deserialize, Debug)]
pub struct RegionQuery {
    /// Comma-separated flags: `restaurants`, `articles`, `profile`.
    pub include: Option<String>,
}

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegionDetail {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "cuisine_characteristics")]
    pub cuisine_characteristics: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub foods: Vec<RatedFood>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurants: Option<Vec<RestaurantItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub articles: Option<Vec<ArticleItem>>,
}

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantItem {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub google_maps_link: Option<String>,
}

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ArticleItem {
    pub id: i32,
    pub title: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub article_type: crate::entity::sea_orm_active_enums::ArticleType,
    pub cover_image_url: Option<String>,
    pub published_at: Option<chrono::NaiveDateTime>,
}

#[tracing::instrument(name = "GET /regions/{region_id}", skip(state))]
pub async fn get_region(
    State(state): State<AppState>,
    Path(region_id): Path<i32>,
    Query(query): Query<RegionQuery>,
) -> Result<Json<RegionDetail>, ApiError> {
    let include: HashSet<&str> = query
        .include
        .as_deref()
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let region = Region::find_by_id(region_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Region not found"))?;

    let foods = foods_with_average(&state.db, region_id).await?;

    let restaurants = if include.contains("restaurants") {
        let rows = Restaurant::find()
            .filter(restaurant::Column::RegionId.eq(region_id))
            .order_by_desc(restaurant::Column::CreatedAt)
            .all(&state.db)
            .await?;
        Some(
            rows.into_iter()
                .map(|r| RestaurantItem {
                    id: r.id,
                    name: r.name,
                    address: r.address,
                    google_maps_link: r.google_maps_link,
                })
                .collect(),
        )
    } else {
        None
    };

    let articles = if include.contains("articles") {
        let rows = Article::find()
            .filter(article::Column::RegionId.eq(region_id))
            .order_by_asc(article::Column::Type)
            .order_by_desc(article::Column::PublishedAt)
            .all(&state.db)
            .await?;
        Some(
            rows.into_iter()
                .map(|a| ArticleItem {
                    id: a.id,
                    title: a.title,
                    slug: a.slug,
                    article_type: a.r#type,
                    cover_image_url: a.cover_image_url,
                    published_at: a.published_at,
                })
                .collect(),
        )
    } else {
        None
    };

    let with_profile = include.contains("profile");
    Ok(Json(RegionDetail {
        id: region.id,
        name: region.name,
        description: region.description,
        cuisine_characteristics: region.cuisine_characteristics,
        profile_content: with_profile.then_some(region.profile_content).flatten(),
        profile_image_url: with_profile.then_some(region.profile_image_url).flatten(),
        slug: with_profile.then_some(region.slug).flatten(),
        foods,
        restaurants,
        articles,
    }))
}
