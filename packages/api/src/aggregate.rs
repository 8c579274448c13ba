//! Rating aggregation and ranking.
//!
//! Averages are not stored columns: every consumer derives them from the
//! raw rating rows fetched alongside the subject entity, then rounds with
//! the same policy so list, detail and top-dish views agree.

use crate::entity::rating;

/// Detail views round to one decimal, list and summary views to two.
pub const DETAIL_PRECISION: u32 = 1;
pub const LIST_PRECISION: u32 = 2;

/// The computed (average, count) pair for one subject entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    pub average: Option<f64>,
    pub count: u64,
}

impl RatingSummary {
    /// Aggregate a set of rating values. An empty set yields no average;
    /// there is never a division by zero.
    pub fn from_values(values: &[i32], precision: u32) -> Self {
        let count = values.len() as u64;
        if count == 0 {
            return Self {
                average: None,
                count: 0,
            };
        }
        let sum: i64 = values.iter().map(|v| *v as i64).sum();
        let mean = sum as f64 / count as f64;
        Self {
            average: Some(round_to(mean, precision)),
            count,
        }
    }

    /// Detail endpoints render a missing average as 0 instead of null.
    pub fn average_or_zero(&self) -> f64 {
        self.average.unwrap_or(0.0)
    }
}

/// Round half away from zero to `precision` decimal places.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// The commenter's own rating for the same food, matched by user id within
/// the food's rating set. A linear scan is fine at catalog scale.
pub fn rating_value_for_user(ratings: &[rating::Model], user_id: i32) -> Option<i32> {
    ratings
        .iter()
        .find(|r| r.user_id == user_id)
        .map(|r| r.value)
}

/// Anything rankable by its computed aggregate.
pub trait RatedItem {
    fn average(&self) -> Option<f64>;
    fn ratings_count(&self) -> u64;
    fn name(&self) -> &str;
}

/// Order by average descending (unrated items last), then rating count
/// descending, then name ascending.
pub fn rank_by_rating<T: RatedItem>(items: &mut [T]) {
    items.sort_by(|a, b| {
        let a_avg = a.average().unwrap_or(-1.0);
        let b_avg = b.average().unwrap_or(-1.0);
        b_avg
            .partial_cmp(&a_avg)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.ratings_count().cmp(&a.ratings_count()))
            .then_with(|| a.name().cmp(b.name()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Dish {
        name: &'static str,
        average: Option<f64>,
        count: u64,
    }

    impl RatedItem for Dish {
        fn average(&self) -> Option<f64> {
            self.average
        }
        fn ratings_count(&self) -> u64 {
            self.count
        }
        fn name(&self) -> &str {
            self.name
        }
    }

    #[test]
    fn empty_set_has_no_average() {
        let summary = RatingSummary::from_values(&[], LIST_PRECISION);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.average, None);
        assert_eq!(summary.average_or_zero(), 0.0);
    }

    #[test]
    fn average_is_rounded_mean() {
        let summary = RatingSummary::from_values(&[5, 3], LIST_PRECISION);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.average, Some(4.0));

        let summary = RatingSummary::from_values(&[5, 3, 3], LIST_PRECISION);
        assert_eq!(summary.average, Some(3.67));

        let summary = RatingSummary::from_values(&[5, 4], DETAIL_PRECISION);
        assert_eq!(summary.average, Some(4.5));
    }

    #[test]
    fn average_stays_in_rating_range() {
        for values in [&[1, 1, 1][..], &[5, 5][..], &[1, 2, 3, 4, 5][..]] {
            let summary = RatingSummary::from_values(values, LIST_PRECISION);
            let avg = summary.average.unwrap();
            assert!((1.0..=5.0).contains(&avg), "average {} out of range", avg);
        }
    }

    #[test]
    fn update_scenario_recomputes_mean() {
        // user 7 rated 5, user 8 rated 3 -> 4.0; user 7 edits to 4 -> 3.5
        assert_eq!(
            RatingSummary::from_values(&[5, 3], LIST_PRECISION).average,
            Some(4.0)
        );
        assert_eq!(
            RatingSummary::from_values(&[4, 3], LIST_PRECISION).average,
            Some(3.5)
        );
    }

    #[test]
    fn ranking_prefers_average_then_count_then_name() {
        let mut dishes = vec![
            Dish {
                name: "A",
                average: Some(4.5),
                count: 10,
            },
            Dish {
                name: "B",
                average: Some(4.5),
                count: 3,
            },
            Dish {
                name: "C",
                average: Some(4.8),
                count: 1,
            },
        ];
        rank_by_rating(&mut dishes);
        let order: Vec<&str> = dishes.iter().map(|d| d.name).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
    }

    #[test]
    fn unrated_items_rank_last_and_tie_on_name() {
        let mut dishes = vec![
            Dish {
                name: "Soto",
                average: None,
                count: 0,
            },
            Dish {
                name: "Gudeg",
                average: Some(3.0),
                count: 1,
            },
            Dish {
                name: "Bakso",
                average: None,
                count: 0,
            },
        ];
        rank_by_rating(&mut dishes);
        let order: Vec<&str> = dishes.iter().map(|d| d.name).collect();
        assert_eq!(order, vec!["Gudeg", "Bakso", "Soto"]);
    }

    #[test]
    fn pairing_matches_commenter_to_own_rating() {
        let ratings = vec![
            rating::Model {
                id: 1,
                value: 5,
                user_id: 7,
                food_id: 1,
            },
            rating::Model {
                id: 2,
                value: 3,
                user_id: 8,
                food_id: 1,
            },
        ];
        assert_eq!(rating_value_for_user(&ratings, 7), Some(5));
        assert_eq!(rating_value_for_user(&ratings, 8), Some(3));
        assert_eq!(rating_value_for_user(&ratings, 9), None);
    }
}
