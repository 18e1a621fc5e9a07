use std::sync::Arc;

use crate::core::error::Result;
use crate::features::catalog::dtos::CatalogItemDto;
use crate::features::catalog::models::{CatalogEntry, CatalogKind, Language};
use crate::features::catalog::store::CatalogStore;

/// Service for the category and amenity reference lists
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Categories ordered by weight (heaviest first), then id
    pub async fn list_categories(&self, language: Language) -> Result<Vec<CatalogItemDto>> {
        let entries = self.store.list_categories().await?;
        Ok(present(CatalogKind::Category, entries, language))
    }

    /// Amenities ordered by weight (heaviest first), then id
    pub async fn list_amenities(&self, language: Language) -> Result<Vec<CatalogItemDto>> {
        let entries = self.store.list_amenities().await?;
        Ok(present(CatalogKind::Amenity, entries, language))
    }

    /// Localized categories among `ids`, in catalog order
    pub async fn categories_by_ids(
        &self,
        ids: &[i32],
        language: Language,
    ) -> Result<Vec<CatalogItemDto>> {
        let entries = self.store.list_categories().await?;
        Ok(present(CatalogKind::Category, only(entries, ids), language))
    }

    /// Localized amenities among `ids`, in catalog order
    pub async fn amenities_by_ids(
        &self,
        ids: &[i32],
        language: Language,
    ) -> Result<Vec<CatalogItemDto>> {
        let entries = self.store.list_amenities().await?;
        Ok(present(CatalogKind::Amenity, only(entries, ids), language))
    }
}

fn only(entries: Vec<CatalogEntry>, ids: &[i32]) -> Vec<CatalogEntry> {
    entries
        .into_iter()
        .filter(|entry| ids.contains(&entry.id))
        .collect()
}

fn present(
    kind: CatalogKind,
    mut entries: Vec<CatalogEntry>,
    language: Language,
) -> Vec<CatalogItemDto> {
    entries.sort_by(|a, b| b.weight.cmp(&a.weight).then(a.id.cmp(&b.id)));
    entries
        .iter()
        .map(|entry| CatalogItemDto::from_entry(kind, entry, language))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::catalog::store::MemoryCatalogStore;

    fn entry(id: i32, en: &str, it: &str, weight: i32) -> CatalogEntry {
        CatalogEntry {
            id,
            en: en.to_string(),
            it: it.to_string(),
            weight,
        }
    }

    fn service() -> CatalogService {
        let store = MemoryCatalogStore {
            categories: vec![
                entry(1, "Restaurant", "Ristorante", 0),
                entry(2, "Wine Bar", "Enoteca", 5),
                entry(3, "Pub", "Pub", 0),
            ],
            amenities: vec![
                entry(1, "Wi-Fi", "Wi-Fi", 0),
                entry(2, "Outdoor Seating", "Dehors", 1),
            ],
        };
        CatalogService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_list_categories_orders_by_weight_then_id() {
        let items = service().list_categories(Language::En).await.unwrap();
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["category_2", "category_1", "category_3"]);
        assert_eq!(items[0].icon, "wine.bar");
    }

    #[tokio::test]
    async fn test_list_amenities_in_italian() {
        let items = service().list_amenities(Language::It).await.unwrap();
        assert_eq!(items[0].id, "amenity_2");
        assert_eq!(items[0].title, "Dehors");
        assert_eq!(items[0].icon, "outdoor.seating");
    }

    #[tokio::test]
    async fn test_amenities_by_ids_keeps_only_requested() {
        let items = service().amenities_by_ids(&[1], Language::En).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Wi-Fi");

        let items = service().categories_by_ids(&[3, 1], Language::It).await.unwrap();
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Ristorante", "Pub"]);
    }
}
