use axum::{
    Json,
    extract::{Path, Query, State},
};
use sea_orm::{
    ColumnTrait, EntityTrait, LoaderTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use serde::Serialize;

use crate::{
    entity::{prelude::*, review},
    error::ApiError,
    routes::{PageMeta, PageQuery, Paginated, UserSummary},
    state::AppState,
};

#[derive(Clone, Serialize, Debug)]
pub struct ReviewWithUser {
    #[serde(flatten)]
    pub review: review::Model,
    pub user: Option<UserSummary>,
}

#[tracing::instrument(name = "GET /articles/{article_id}/reviews", skip(state))]
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(article_id): Path<i32>,
    Query(page_query): Query<PageQuery>,
) -> Result<Json<Paginated<ReviewWithUser>>, ApiError> {
    let (page, page_size) = page_query.resolve(10);

    let select = Review::find().filter(review::Column::ArticleId.eq(article_id));
    let total = select.clone().count(&state.db).await?;

    let reviews = select
        .order_by_desc(review::Column::CreatedAt)
        .paginate(&state.db, page_size)
        .fetch_page(page - 1)
        .await?;
    let users = reviews.load_one(User, &state.db).await?;

    let data = reviews
        .into_iter()
        .zip(users)
        .map(|(review, user)| ReviewWithUser {
            review,
            user: user.map(UserSummary::from),
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
