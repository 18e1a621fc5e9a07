use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::catalog::models::Language;
use crate::features::catalog::CatalogService;
use crate::features::venues::dtos::{VenueDetailDto, VenueRankDto};
use crate::features::venues::engine::{rank_position, ScoredVenue, SortOrder};
use crate::features::venues::models::Venue;
use crate::features::venues::store::VenueStore;
use crate::shared::constants::RANK_WINDOW;

/// Single-venue reads: detail, rank lookups and the per-category top list
pub struct VenueService {
    store: Arc<dyn VenueStore>,
    catalog: Arc<CatalogService>,
}

impl VenueService {
    pub fn new(store: Arc<dyn VenueStore>, catalog: Arc<CatalogService>) -> Self {
        Self { store, catalog }
    }

    async fn find(&self, id: Uuid) -> Result<Venue> {
        self.store
            .find_by_uuid(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Venue with id '{}' not found", id)))
    }

    /// Detail of an approved venue with localized labels and its category rank
    pub async fn get_detail(&self, id: Uuid, language: Language) -> Result<VenueDetailDto> {
        let venue = self.find(id).await?;
        if !venue.is_approved {
            return Err(AppError::NotFound(format!("Venue with id '{}' not found", id)));
        }

        let rank = self.category_rank(&venue).await?;

        let category = match &venue.category {
            Some(category) => self
                .catalog
                .categories_by_ids(&[category.id], language)
                .await?
                .into_iter()
                .next(),
            None => None,
        };

        let category_ids: Vec<i32> = venue.categories.iter().map(|c| c.id).collect();
        let categories = self
            .catalog
            .categories_by_ids(&category_ids, language)
            .await?;
        let amenities = self
            .catalog
            .amenities_by_ids(&venue.amenity_ids, language)
            .await?;

        Ok(VenueDetailDto::new(
            venue, category, categories, amenities, rank,
        ))
    }

    /// Both ranks of any known venue; unapproved venues are simply unranked
    pub async fn get_rank(&self, id: Uuid) -> Result<VenueRankDto> {
        let venue = self.find(id).await?;

        Ok(VenueRankDto {
            category_rank: self.category_rank(&venue).await?,
            place_rank: self.place_rank(&venue).await?,
        })
    }

    /// 1-based position among approved venues of the same place and primary
    /// category, within the top window
    pub async fn category_rank(&self, venue: &Venue) -> Result<Option<u32>> {
        let (Some(place_id), Some(category)) = (venue.place_id(), venue.category.as_ref()) else {
            return Ok(None);
        };

        let peers = self
            .store
            .fetch_place_peers(place_id, Some(category.id))
            .await?;
        Ok(rank_position(&peers, venue.id, Some(RANK_WINDOW)))
    }

    /// 1-based position among all approved venues of the same place
    pub async fn place_rank(&self, venue: &Venue) -> Result<Option<u32>> {
        let Some(place_id) = venue.place_id() else {
            return Ok(None);
        };
        if !venue.is_approved {
            return Ok(None);
        }

        let peers = self.store.fetch_place_peers(place_id, None).await?;
        Ok(rank_position(&peers, venue.id, None))
    }

    /// Top venues of a place and category, most liked first
    pub async fn ranked_venues(&self, place_id: &str, category_id: i32) -> Result<Vec<ScoredVenue>> {
        let peers = self
            .store
            .fetch_place_peers(place_id, Some(category_id))
            .await?;

        let mut ranked: Vec<ScoredVenue> = peers
            .into_iter()
            .map(|venue| ScoredVenue {
                venue,
                distance: None,
            })
            .collect();
        SortOrder::Likes.sort(&mut ranked);
        ranked.truncate(RANK_WINDOW);

        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::catalog::models::CatalogEntry;
    use crate::features::catalog::store::MemoryCatalogStore;
    use crate::features::venues::store::MemoryVenueStore;
    use crate::shared::test_helpers::VenueBuilder;

    fn entry(id: i32, en: &str, it: &str) -> CatalogEntry {
        CatalogEntry {
            id,
            en: en.to_string(),
            it: it.to_string(),
            weight: 0,
        }
    }

    fn service(venues: Vec<Venue>) -> VenueService {
        let catalog = MemoryCatalogStore {
            categories: vec![
                entry(1, "Restaurant", "Ristorante"),
                entry(3, "Pub", "Pub"),
            ],
            amenities: vec![entry(7, "Outdoor Seating", "Dehors")],
        };
        VenueService::new(
            Arc::new(MemoryVenueStore::new(venues)),
            Arc::new(CatalogService::new(Arc::new(catalog))),
        )
    }

    /// Twelve pubs in Milan; venue `n` has `100 - n` likes
    fn pubs() -> Vec<Venue> {
        (1..=12)
            .map(|id| {
                VenueBuilder::new(id)
                    .place("milan")
                    .category(3, "Pub")
                    .likes(100 - id)
                    .build()
            })
            .collect()
    }

    #[tokio::test]
    async fn test_category_rank_window() {
        let venues = pubs();
        let tenth = venues[9].clone();
        let eleventh = venues[10].clone();
        let service = service(venues);

        assert_eq!(service.category_rank(&tenth).await.unwrap(), Some(10));
        assert_eq!(service.category_rank(&eleventh).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_category_rank_without_category_is_unranked() {
        let venue = VenueBuilder::new(1).place("milan").build();
        let service = service(vec![venue.clone()]);
        assert_eq!(service.category_rank(&venue).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_place_rank_is_uncapped_and_ignores_category() {
        let mut venues = pubs();
        let restaurant = VenueBuilder::new(20)
            .place("milan")
            .category(1, "Restaurant")
            .likes(0)
            .build();
        venues.push(restaurant.clone());
        let service = service(venues);

        let rank = service.get_rank(restaurant.uuid).await.unwrap();
        assert_eq!(rank.place_rank, Some(13));
        assert_eq!(rank.category_rank, Some(1));
    }

    #[tokio::test]
    async fn test_unapproved_venue_is_unranked() {
        let pending = VenueBuilder::new(1)
            .place("milan")
            .category(3, "Pub")
            .unapproved()
            .build();
        let service = service(vec![pending.clone()]);

        let rank = service.get_rank(pending.uuid).await.unwrap();
        assert_eq!(
            rank,
            VenueRankDto {
                category_rank: None,
                place_rank: None
            }
        );
    }

    #[tokio::test]
    async fn test_detail_localizes_labels() {
        let venue = VenueBuilder::new(1)
            .place("milan")
            .category(1, "Restaurant")
            .secondary(3, "Pub")
            .amenities(&[7])
            .likes(4)
            .build();
        let service = service(vec![venue.clone()]);

        let detail = service.get_detail(venue.uuid, Language::It).await.unwrap();
        assert_eq!(detail.category.unwrap().title, "Ristorante");
        assert_eq!(detail.categories[0].id, "category_3");
        assert_eq!(detail.amenities[0].title, "Dehors");
        assert_eq!(detail.rank, Some(1));
        assert_eq!(detail.likes_count, 4);
    }

    #[tokio::test]
    async fn test_detail_hides_unapproved_and_unknown() {
        let pending = VenueBuilder::new(1).unapproved().build();
        let service = service(vec![pending.clone()]);

        assert!(matches!(
            service.get_detail(pending.uuid, Language::En).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.get_detail(Uuid::now_v7(), Language::En).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_ranked_venues_top_ten_by_likes() {
        let service = service(pubs());
        let ranked = service.ranked_venues("milan", 3).await.unwrap();

        let ids: Vec<i64> = ranked.iter().map(|v| v.venue.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<i64>>());
        assert!(service.ranked_venues("rome", 3).await.unwrap().is_empty());
    }
}
