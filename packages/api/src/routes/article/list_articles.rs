use axum::{
    Json,
    extract::{Query, State},
};
use sea_orm::{
    ColumnTrait, EntityTrait, LoaderTrait, PaginatorTrait, QueryFilter, QueryOrder,
    sea_query::{Expr, extension::postgres::PgExpr},
};
use serde::{Deserialize, Serialize};

use crate::{
    entity::{article, prelude::*, sea_orm_active_enums::ArticleType},
    error::ApiError,
    routes::{PageMeta, PageQuery, Paginated, food::list_foods::RegionRef},
    state::AppState,
};

#[derive(Clone, Deserialize, Debug)]
pub struct ArticleListQuery {
    #[serde(rename = "regionId")]
    pub region_id: Option<i32>,
    pub r#type: Option<ArticleType>,
    pub q: Option<String>,
    #[serde(flatten)]
    pub page: PageQuery,
}

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListItem {
    pub id: i32,
    pub title: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub article_type: ArticleType,
    pub cover_image_url: Option<String>,
    pub published_at: Option<chrono::NaiveDateTime>,
    pub region: Option<RegionRef>,
}

/// Articles rank by publish date; no computed aggregate here, so ordering
/// and pagination both push to the store.
#[tracing::instrument(name = "GET /articles", skip(state))]
pub async fn list_articles(
    State(state): State<AppState>,
    Query(query): Query<ArticleListQuery>,
) -> Result<Json<Paginated<ArticleListItem>>, ApiError> {
    let (page, page_size) = query.page.resolve(10);

    let mut select = Article::find();
    if let Some(region_id) = query.region_id {
        select = select.filter(article::Column::RegionId.eq(region_id));
    }
    if let Some(article_type) = query.r#type.clone() {
        select = select.filter(article::Column::Type.eq(article_type));
    }
    if let Some(q) = query.q.as_deref().filter(|q| !q.is_empty()) {
        select = select
            .filter(Expr::col((article::Entity, article::Column::Title)).ilike(format!("%{}%", q)));
    }

    let total = select.clone().count(&state.db).await?;
    let articles = select
        .order_by_desc(article::Column::PublishedAt)
        .order_by_desc(article::Column::Id)
        .paginate(&state.db, page_size)
        .fetch_page(page - 1)
        .await?;

    let regions = articles.load_one(Region, &state.db).await?;

    let data = articles
        .into_iter()
        .zip(regions)
        .map(|(a, region)| ArticleListItem {
            id: a.id,
            title: a.title,
            slug: a.slug,
            article_type: a.r#type,
            cover_image_url: a.cover_image_url,
            published_at: a.published_at,
            region: region.map(|r| RegionRef {
                id: r.id,
                name: r.name,
            }),
        })
        .collect();

    Ok(Json(Paginated {
        data,
        meta: PageMeta {
            total,
            page,
            page_size,
        },
    }))
}
