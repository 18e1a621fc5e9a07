use std::cmp::Ordering;

use crate::features::venues::models::Venue;

/// Composed sort key of a result set. `id` always breaks the final tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// distance asc, likes desc, id asc
    Nearest,
    /// likes desc, distance asc, id asc
    Popular,
    /// distance asc, id asc
    Distance,
    /// likes desc, id asc
    Likes,
}

/// A venue that passed the filter chain, with its distance from the caller
#[derive(Debug, Clone)]
pub struct ScoredVenue {
    pub venue: Venue,
    pub distance: Option<f64>,
}

/// Missing distances sort after every known one
fn cmp_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl SortOrder {
    pub fn compare(self, a: &ScoredVenue, b: &ScoredVenue) -> Ordering {
        let likes = || b.venue.likes_count.cmp(&a.venue.likes_count);
        let distance = || cmp_distance(a.distance, b.distance);
        let id = || a.venue.id.cmp(&b.venue.id);

        match self {
            SortOrder::Nearest => distance().then_with(likes).then_with(id),
            SortOrder::Popular => likes().then_with(distance).then_with(id),
            SortOrder::Distance => distance().then_with(id),
            SortOrder::Likes => likes().then_with(id),
        }
    }

    pub fn sort(self, venues: &mut [ScoredVenue]) {
        venues.sort_by(|a, b| self.compare(a, b));
    }
}

/// `[offset, offset + size)` of an already sorted set; out of range is empty
pub fn page<T>(items: Vec<T>, offset: i64, size: i64) -> Vec<T> {
    let offset = usize::try_from(offset).unwrap_or(0);
    let size = usize::try_from(size).unwrap_or(0);

    items.into_iter().skip(offset).take(size).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::VenueBuilder;

    fn scored(id: i64, likes: i64, distance: Option<f64>) -> ScoredVenue {
        ScoredVenue {
            venue: VenueBuilder::new(id).likes(likes).build(),
            distance,
        }
    }

    fn ids(venues: &[ScoredVenue]) -> Vec<i64> {
        venues.iter().map(|v| v.venue.id).collect()
    }

    #[test]
    fn test_nearest_orders_by_distance_then_likes_then_id() {
        let mut venues = vec![
            scored(4, 1, Some(300.0)),
            scored(3, 9, Some(100.0)),
            scored(2, 5, Some(100.0)),
            scored(1, 5, Some(100.0)),
        ];
        SortOrder::Nearest.sort(&mut venues);
        assert_eq!(ids(&venues), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_popular_orders_by_likes_first() {
        let mut venues = vec![
            scored(1, 2, Some(10.0)),
            scored(2, 8, Some(900.0)),
            scored(3, 8, Some(500.0)),
        ];
        SortOrder::Popular.sort(&mut venues);
        assert_eq!(ids(&venues), vec![3, 2, 1]);
    }

    #[test]
    fn test_missing_distance_sorts_last() {
        let mut venues = vec![scored(1, 0, None), scored(2, 0, Some(5_000.0))];
        SortOrder::Distance.sort(&mut venues);
        assert_eq!(ids(&venues), vec![2, 1]);
    }

    #[test]
    fn test_paging_through_ties_has_no_gaps_or_duplicates() {
        // Every row ties on distance and likes; id must decide
        let build = || -> Vec<ScoredVenue> {
            [7, 3, 12, 1, 9, 5, 2, 11, 4, 8, 6, 10, 13]
                .into_iter()
                .map(|id| scored(id, 4, Some(250.0)))
                .collect()
        };

        let mut seen = Vec::new();
        let mut offset = 0;
        loop {
            let mut venues = build();
            SortOrder::Nearest.sort(&mut venues);
            let chunk = page(venues, offset, 6);
            if chunk.is_empty() {
                break;
            }
            seen.extend(ids(&chunk));
            offset += 6;
        }

        assert_eq!(seen, (1..=13).collect::<Vec<i64>>());
    }

    #[test]
    fn test_page_out_of_range_is_empty() {
        let items: Vec<i32> = (0..5).collect();
        assert_eq!(page(items.clone(), 3, 10), vec![3, 4]);
        assert!(page(items.clone(), 10, 6).is_empty());
        assert!(page(items, -1, 0).is_empty());
    }
}
