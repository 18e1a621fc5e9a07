use async_trait::async_trait;
use uuid::Uuid;

use super::VenueStore;
use crate::core::error::Result;
use crate::features::venues::engine::{page, CandidateFilter, GeoScope};
use crate::features::venues::models::Venue;

/// Venue store over a fixed list, narrowing the same way the SQL does
#[derive(Default)]
pub struct MemoryVenueStore {
    venues: Vec<Venue>,
}

impl MemoryVenueStore {
    pub fn new(venues: Vec<Venue>) -> Self {
        Self { venues }
    }

    fn approved(&self) -> impl Iterator<Item = &Venue> {
        self.venues.iter().filter(|v| v.is_approved)
    }
}

#[async_trait]
impl VenueStore for MemoryVenueStore {
    async fn fetch_candidates(
        &self,
        scope: &GeoScope,
        filter: &CandidateFilter,
    ) -> Result<Vec<Venue>> {
        let bbox = scope.bounding_box();

        Ok(self
            .approved()
            .filter(|venue| match scope {
                GeoScope::City { place_id } => venue.place_id() == Some(place_id.as_str()),
                GeoScope::Radius { .. } => match (bbox, venue.coordinate()) {
                    (Some(bbox), Some(point)) => bbox.contains(point),
                    _ => false,
                },
            })
            .filter(|venue| admits(filter, venue))
            .cloned()
            .collect())
    }

    async fn search_by_name(&self, value: &str, offset: i64, limit: i64) -> Result<Vec<Venue>> {
        let needle = value.to_lowercase();
        let mut matched: Vec<Venue> = self
            .approved()
            .filter(|venue| venue.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        matched.sort_by_key(|venue| venue.id);

        Ok(page(matched, offset, limit))
    }

    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Venue>> {
        Ok(self.venues.iter().find(|v| v.uuid == uuid).cloned())
    }

    async fn fetch_place_peers(
        &self,
        place_id: &str,
        category_id: Option<i32>,
    ) -> Result<Vec<Venue>> {
        Ok(self
            .approved()
            .filter(|venue| venue.place_id() == Some(place_id))
            .filter(|venue| match category_id {
                Some(id) => venue.category.as_ref().is_some_and(|c| c.id == id),
                None => true,
            })
            .cloned()
            .collect())
    }
}

fn admits(filter: &CandidateFilter, venue: &Venue) -> bool {
    let categories: Vec<_> = venue.category.iter().chain(venue.categories.iter()).collect();

    let by_id = (filter.category_ids.is_empty() && filter.amenity_ids.is_empty())
        || categories.iter().any(|c| filter.category_ids.contains(&c.id))
        || venue
            .amenity_ids
            .iter()
            .any(|id| filter.amenity_ids.contains(id));
    let by_label = filter.category_labels.is_empty()
        || categories
            .iter()
            .any(|c| filter.category_labels.contains(&c.en));

    (!filter.scheduled || venue.timetable.is_some())
        && (!filter.has_spots || venue.has_spots)
        && filter
            .price_target
            .is_none_or(|tier| venue.price_target == Some(tier))
        && by_id
        && by_label
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::venues::models::Coordinate;
    use crate::shared::test_helpers::VenueBuilder;

    #[tokio::test]
    async fn test_fetch_candidates_applies_candidate_filter() {
        let store = MemoryVenueStore::new(vec![
            VenueBuilder::new(1)
                .place("milan")
                .scheduled()
                .price(2)
                .category(3, "Pub")
                .build(),
            VenueBuilder::new(2).place("milan").price(2).category(3, "Pub").build(),
            VenueBuilder::new(3)
                .place("milan")
                .scheduled()
                .price(4)
                .category(3, "Pub")
                .build(),
            VenueBuilder::new(4)
                .place("milan")
                .scheduled()
                .price(2)
                .category(1, "Restaurant")
                .build(),
            VenueBuilder::new(5)
                .place("milan")
                .scheduled()
                .price(2)
                .category(1, "Restaurant")
                .secondary(3, "Pub")
                .build(),
        ]);
        let scope = GeoScope::City {
            place_id: "milan".to_string(),
        };
        let filter = CandidateFilter {
            scheduled: true,
            price_target: Some(2),
            category_ids: vec![3],
            ..CandidateFilter::default()
        };

        let ids: Vec<i64> = store
            .fetch_candidates(&scope, &filter)
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec![1, 5]);

        let everything = store
            .fetch_candidates(&scope, &CandidateFilter::default())
            .await
            .unwrap();
        assert_eq!(everything.len(), 5);
    }

    #[tokio::test]
    async fn test_fetch_candidates_filters_by_label_and_spots() {
        let store = MemoryVenueStore::new(vec![
            VenueBuilder::new(1).at(9.19, 45.46).category(3, "Pub").spots().build(),
            VenueBuilder::new(2).at(9.19, 45.46).category(3, "Pub").build(),
            VenueBuilder::new(3).at(9.19, 45.46).category(1, "Restaurant").spots().build(),
        ]);
        let scope = GeoScope::Radius {
            origin: Coordinate::new(9.19, 45.46),
            meters: 1_000.0,
        };
        let filter = CandidateFilter {
            has_spots: true,
            category_labels: vec!["Pub".to_string(), "Bar".to_string()],
            ..CandidateFilter::default()
        };

        let venues = store.fetch_candidates(&scope, &filter).await.unwrap();
        assert_eq!(venues.len(), 1);
        assert_eq!(venues[0].id, 1);
    }
}
