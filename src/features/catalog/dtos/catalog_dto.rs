use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::catalog::models::{CatalogEntry, CatalogKind, Language};

/// Query params selecting the label language
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct LanguageQuery {
    /// `en` (default) or `it`
    pub lang: Option<String>,
}

impl LanguageQuery {
    pub fn language(&self) -> Language {
        Language::from_code(self.lang.as_deref())
    }
}

/// Catalog item as shown to clients
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CatalogItemDto {
    /// `category_<n>` or `amenity_<n>`
    pub id: String,
    pub title: String,
    pub icon: String,
}

impl CatalogItemDto {
    pub fn from_entry(kind: CatalogKind, entry: &CatalogEntry, language: Language) -> Self {
        Self {
            id: kind.public_id(entry.id),
            title: entry.label(language).to_string(),
            icon: entry.icon(),
        }
    }
}
