use axum::{
    Json,
    extract::{Path, State},
};
use sea_orm::{ColumnTrait, EntityTrait, LoaderTrait, ModelTrait, QueryFilter, QueryOrder};
use serde::Serialize;

use crate::{
    aggregate::{DETAIL_PRECISION, RatingSummary, rating_value_for_user},
    entity::{article, comment, food, prelude::*, region},
    error::ApiError,
    routes::{UserSummary, food::list_foods::RegionRef},
    state::AppState,
};

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FoodDetail {
    #[serde(flatten)]
    pub food: food::Model,
    pub region: Option<region::Model>,
    pub restaurants: Vec<RestaurantRef>,
    pub article: Option<ArticleRef>,
    pub comments: Vec<CommentWithRating>,
    pub average_rating: f64,
    pub ratings_count: u64,
}

#[derive(Clone, Serialize, Debug)]
pub struct RestaurantRef {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub region: Option<RegionRef>,
}

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRef {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub cover_image_url: Option<String>,
    pub published_at: Option<chrono::NaiveDateTime>,
    #[serde(rename = "type")]
    pub article_type: crate::entity::sea_orm_active_enums::ArticleType,
}

/// A comment annotated with its author's own rating for the same food.
#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CommentWithRating {
    #[serde(flatten)]
    pub comment: comment::Model,
    pub user: Option<UserSummary>,
    pub rating_value: Option<i32>,
}

#[tracing::instrument(name = "GET /foods/{food_id}", skip(state))]
pub async fn get_food(
    State(state): State<AppState>,
    Path(food_id): Path<i32>,
) -> Result<Json<FoodDetail>, ApiError> {
    let food = Food::find_by_id(food_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Food not found"))?;

    let region = food.find_related(Region).one(&state.db).await?;

    let restaurants = food.find_related(Restaurant).all(&state.db).await?;
    let restaurant_regions = restaurants.load_one(Region, &state.db).await?;
    let restaurants = restaurants
        .into_iter()
        .zip(restaurant_regions)
        .map(|(r, region)| RestaurantRef {
            id: r.id,
            name: r.name,
            address: r.address,
            region: region.map(|reg| RegionRef {
                id: reg.id,
                name: reg.name,
            }),
        })
        .collect();

    let linked_article = match food.article_id {
        Some(article_id) => Article::find_by_id(article_id)
            .one(&state.db)
            .await?
            .map(|a: article::Model| ArticleRef {
                id: a.id,
                title: a.title,
                slug: a.slug,
                cover_image_url: a.cover_image_url,
                published_at: a.published_at,
                article_type: a.r#type,
            }),
        None => None,
    };

    let comments = Comment::find()
        .filter(comment::Column::FoodId.eq(food_id))
        .order_by_desc(comment::Column::CreatedAt)
        .all(&state.db)
        .await?;
    let commenters = comments.load_one(User, &state.db).await?;

    let ratings = food.find_related(Rating).all(&state.db).await?;
    let values: Vec<i32> = ratings.iter().map(|r| r.value).collect();
    let summary = RatingSummary::from_values(&values, DETAIL_PRECISION);

    let comments = comments
        .into_iter()
        .zip(commenters)
        .map(|(comment, user)| CommentWithRating {
            rating_value: rating_value_for_user(&ratings, comment.user_id),
            user: user.map(UserSummary::from),
            comment,
        })
        .collect();

    Ok(Json(FoodDetail {
        food,
        region,
        restaurants,
        article: linked_article,
        comments,
        average_rating: summary.average_or_zero(),
        ratings_count: summary.count,
    }))
}
