use axum::{
    Json,
    extract::{Query, State},
};
use sea_orm::{
    ColumnTrait, EntityTrait, LoaderTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
    sea_query::{Expr, extension::postgres::PgExpr},
};
use serde::{Deserialize, Serialize};

use crate::{
    aggregate::{self, LIST_PRECISION, RatedItem, RatingSummary},
    entity::{food, prelude::*, region},
    error::ApiError,
    routes::{PageMeta, PageQuery, Paginated},
    state::AppState,
};

#[derive(Clone, Deserialize, Debug)]
pub struct FoodListQuery {
    #[serde(rename = "regionId")]
    pub region_id: Option<i32>,
    pub q: Option<String>,
    pub sort: Option<String>,
    #[serde(flatten)]
    pub page: PageQuery,
}

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FoodListItem {
    pub id: i32,
    pub name: String,
    pub image_url: Option<String>,
    pub city_name: Option<String>,
    pub intro: Option<String>,
    pub updated_at: chrono::NaiveDateTime,
    pub region: Option<RegionRef>,
    pub average_rating: Option<f64>,
    pub ratings_count: u64,
}

#[derive(Clone, Serialize, Debug)]
pub struct RegionRef {
    pub id: i32,
    pub name: String,
}

impl RatedItem for FoodListItem {
    fn average(&self) -> Option<f64> {
        self.average_rating
    }
    fn ratings_count(&self) -> u64 {
        self.ratings_count
    }
    fn name(&self) -> &str {
        &self.name
    }
}

fn filtered(region_id: Option<i32>, q: Option<&str>) -> Select<Food> {
    let mut select = Food::find();
    if let Some(region_id) = region_id {
        select = select.filter(food::Column::RegionId.eq(region_id));
    }
    if let Some(q) = q.filter(|q| !q.is_empty()) {
        select = select
            .filter(Expr::col((food::Entity, food::Column::Name)).ilike(format!("%{}%", q)));
    }
    select
}

async fn collect_items(
    db: &sea_orm::DatabaseConnection,
    foods: Vec<food::Model>,
) -> Result<Vec<FoodListItem>, ApiError> {
    let ratings = foods.load_many(Rating, db).await?;
    let regions = foods.load_one(Region, db).await?;

    let items = foods
        .into_iter()
        .zip(ratings)
        .zip(regions)
        .map(|((food, ratings), region)| {
            let values: Vec<i32> = ratings.iter().map(|r| r.value).collect();
            let summary = RatingSummary::from_values(&values, LIST_PRECISION);
            FoodListItem {
                id: food.id,
                name: food.name,
                image_url: food.image_url,
                city_name: food.city_name,
                intro: food.intro,
                updated_at: food.updated_at,
                region: region.map(|r: region::Model| RegionRef {
                    id: r.id,
                    name: r.name,
                }),
                average_rating: summary.average,
                ratings_count: summary.count,
            }
        })
        .collect();
    Ok(items)
}

/// The aggregate is not a stored column, so `sort=rating` fetches the whole
/// filtered candidate set, ranks it in memory and paginates afterwards.
/// `sort=recent` pushes ordering and pagination to the store.
#[tracing::instrument(name = "GET /foods", skip(state))]
pub async fn list_foods(
    State(state): State<AppState>,
    Query(query): Query<FoodListQuery>,
) -> Result<Json<Paginated<FoodListItem>>, ApiError> {
    let (page, page_size) = query.page.resolve(12);
    let by_rating = query.sort.as_deref() == Some("rating");

    let select = filtered(query.region_id, query.q.as_deref());
    let total = select.clone().count(&state.db).await?;

    let data = if by_rating {
        let foods = select
            .order_by_asc(food::Column::Name)
            .all(&state.db)
            .await?;
        let mut items = collect_items(&state.db, foods).await?;
        aggregate::rank_by_rating(&mut items);
        items
            .into_iter()
            .skip(((page - 1) * page_size) as usize)
            .take(page_size as usize)
            .collect()
    } else {
        let foods = select
            .order_by_desc(food::Column::UpdatedAt)
            .paginate(&state.db, page_size)
            .fetch_page(page - 1)
            .await?;
        collect_items(&state.db, foods).await?
    };

    Ok(Json(Paginated {
        data,
        meta: PageMeta {
            total,
            page,
            page_size,
        },
    }))
}
