//! Slug derivation for articles.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::{
    entity::{article, prelude::*},
    error::ApiError,
};

const FALLBACK_SLUG: &str = "artikel";

/// Lowercase, collapse non-alphanumeric runs to `-`, strip edge dashes.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;
    for c in input.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Derive a slug from `base` that no article uses yet, probing with
/// `-1`, `-2`, … suffixes on collision.
pub async fn ensure_unique_slug<C: ConnectionTrait>(db: &C, base: &str) -> Result<String, ApiError> {
    let mut root = slugify(base);
    if root.is_empty() {
        root = FALLBACK_SLUG.to_string();
    }

    let mut candidate = root.clone();
    let mut suffix = 0u32;
    loop {
        let exists = Article::find()
            .filter(article::Column::Slug.eq(candidate.as_str()))
            .one(db)
            .await?
            .is_some();
        if !exists {
            return Ok(candidate);
        }
        suffix += 1;
        candidate = format!("{}-{}", root, suffix);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_dashes() {
        assert_eq!(slugify("Rendang Daging Sapi"), "rendang-daging-sapi");
        assert_eq!(slugify("  Sate  Lilit!  "), "sate-lilit");
        assert_eq!(slugify("Nasi--Goreng"), "nasi-goreng");
    }

    #[test]
    fn strips_edge_dashes() {
        assert_eq!(slugify("--Gudeg--"), "gudeg");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(slugify("Top 10 Soto"), "top-10-soto");
    }
}
