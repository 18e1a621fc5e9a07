use sqlx::FromRow;

/// Row of `venue_categories` or `amenities`
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CatalogEntry {
    pub id: i32,
    pub en: String,
    pub it: String,
    pub weight: i32,
}

impl CatalogEntry {
    pub fn label(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::It => &self.it,
        }
    }

    /// Client icon name: English label, lower-cased, spaces as dots
    pub fn icon(&self) -> String {
        self.en.replace(' ', ".").to_lowercase()
    }
}

/// Which list an entry comes from; prefixes its public id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Category,
    Amenity,
}

impl CatalogKind {
    pub fn public_id(self, id: i32) -> String {
        match self {
            CatalogKind::Category => format!("category_{}", id),
            CatalogKind::Amenity => format!("amenity_{}", id),
        }
    }
}

/// Display languages of the catalog labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    It,
}

impl Language {
    /// Unknown or missing codes fall back to English
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(|c| c.trim().to_ascii_lowercase()).as_deref() {
            Some("it") => Language::It,
            _ => Language::En,
        }
    }
}
