use serde::{Deserialize, Serialize};

pub mod article;
pub mod food;
pub mod health;
pub mod region;
pub mod suggestion;
pub mod user;

/// `?page=&pageSize=` with the clamping every paginated endpoint shares.
#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct PageQuery {
    pub page: Option<u64>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<u64>,
}

impl PageQuery {
    pub fn resolve(&self, default_page_size: u64) -> (u64, u64) {
        let page = self.page.unwrap_or(1).clamp(1, 1_000_000);
        let page_size = self.page_size.unwrap_or(default_page_size).clamp(1, 100);
        (page, page_size)
    }
}

/// `{data, meta}` list envelope.
#[derive(Clone, Serialize, Debug)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

#[derive(Clone, Serialize, Debug)]
pub struct PageMeta {
    pub total: u64,
    pub page: u64,
    #[serde(rename = "pageSize")]
    pub page_size: u64,
}

/// Short user rendering attached to comments and reviews.
#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl From<crate::entity::user::Model> for UserSummary {
    fn from(user: crate::entity::user::Model) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_clamps_bounds() {
        let q = PageQuery {
            page: Some(0),
            page_size: Some(10_000),
        };
        assert_eq!(q.resolve(12), (1, 100));

        let q = PageQuery {
            page: None,
            page_size: None,
        };
        assert_eq!(q.resolve(12), (1, 12));
    }
}
