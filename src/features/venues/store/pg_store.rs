use async_trait::async_trait;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

use super::VenueStore;
use crate::core::error::{AppError, Result};
use crate::features::venues::engine::{CandidateFilter, GeoScope};
use crate::features::venues::models::{Venue, VenueRow};

/// Venue columns joined with location, timetable, counters and link arrays
const VENUE_SELECT: &str = r#"
    SELECT
        v.id, v.uuid, v.name, v.description, v.cover_source, v.is_approved, v.price_target,
        v.category_id, c.en AS category_en,
        (l.id IS NOT NULL) AS has_location, l.place_id, l.city, l.address,
        l.latitude, l.longitude,
        (t.id IS NOT NULL) AS has_timetable,
        t.mon, t.tue, t.wed, t.thu, t.fri, t.sat, t.sun,
        (SELECT COUNT(*) FROM venue_likes vl WHERE vl.venue_id = v.id) AS likes_count,
        ARRAY(
            SELECT cl.category_id FROM venue_category_links cl
            WHERE cl.venue_id = v.id ORDER BY cl.category_id
        ) AS category_ids,
        ARRAY(
            SELECT vc.en FROM venue_category_links cl
            JOIN venue_categories vc ON vc.id = cl.category_id
            WHERE cl.venue_id = v.id ORDER BY cl.category_id
        ) AS category_names,
        ARRAY(
            SELECT al.amenity_id FROM venue_amenity_links al
            WHERE al.venue_id = v.id ORDER BY al.amenity_id
        ) AS amenity_ids,
        EXISTS(SELECT 1 FROM venue_spots s WHERE s.venue_id = v.id) AS has_spots
    FROM venues v
    LEFT JOIN venue_categories c ON c.id = v.category_id
    LEFT JOIN locations l ON l.venue_id = v.id
    LEFT JOIN venue_timetables t ON t.venue_id = v.id
"#;

/// PostgreSQL-backed venue store
pub struct PgVenueStore {
    pool: PgPool,
}

impl PgVenueStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VenueStore for PgVenueStore {
    async fn fetch_candidates(
        &self,
        scope: &GeoScope,
        filter: &CandidateFilter,
    ) -> Result<Vec<Venue>> {
        let rows = match scope {
            GeoScope::City { place_id } => {
                let sql = format!(
                    "{} WHERE v.is_approved = TRUE AND l.place_id = $1 AND {}",
                    VENUE_SELECT,
                    filter_clause(2)
                );
                let query = sqlx::query_as::<_, VenueRow>(&sql).bind(place_id);
                bind_filter(query, filter).fetch_all(&self.pool).await
            }
            GeoScope::Radius { .. } => {
                // Radius scopes always carry a box
                let Some(bbox) = scope.bounding_box() else {
                    return Ok(Vec::new());
                };
                let [east, west] = bbox.longitude_ranges();
                let sql = format!(
                    "{} WHERE v.is_approved = TRUE \
                     AND l.latitude BETWEEN $1 AND $2 \
                     AND (l.longitude BETWEEN $3 AND $4 OR l.longitude BETWEEN $5 AND $6) \
                     AND {}",
                    VENUE_SELECT,
                    filter_clause(7)
                );
                let query = sqlx::query_as::<_, VenueRow>(&sql)
                    .bind(bbox.min_latitude)
                    .bind(bbox.max_latitude)
                    .bind(east.0)
                    .bind(east.1)
                    .bind(west.0)
                    .bind(west.1);
                bind_filter(query, filter).fetch_all(&self.pool).await
            }
        }
        .map_err(|e| {
            tracing::error!("Failed to fetch venue candidates for {:?}: {:?}", scope, e);
            AppError::Database(e)
        })?;

        tracing::debug!(count = rows.len(), "Fetched venue candidates");

        Ok(rows.into_iter().map(Venue::from).collect())
    }

    async fn search_by_name(&self, value: &str, offset: i64, limit: i64) -> Result<Vec<Venue>> {
        let pattern = format!("%{}%", escape_like(value));
        let sql = format!(
            "{} WHERE v.is_approved = TRUE AND v.name ILIKE $1 ESCAPE '\\' \
             ORDER BY v.id ASC OFFSET $2 LIMIT $3",
            VENUE_SELECT
        );

        let rows = sqlx::query_as::<_, VenueRow>(&sql)
            .bind(pattern)
            .bind(offset)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to search venues by name: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(rows.into_iter().map(Venue::from).collect())
    }

    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Venue>> {
        let sql = format!("{} WHERE v.uuid = $1", VENUE_SELECT);

        let row = sqlx::query_as::<_, VenueRow>(&sql)
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch venue {}: {:?}", uuid, e);
                AppError::Database(e)
            })?;

        Ok(row.map(Venue::from))
    }

    async fn fetch_place_peers(
        &self,
        place_id: &str,
        category_id: Option<i32>,
    ) -> Result<Vec<Venue>> {
        let sql = format!(
            "{} WHERE v.is_approved = TRUE AND l.place_id = $1 \
             AND ($2::INT IS NULL OR v.category_id = $2)",
            VENUE_SELECT
        );

        let rows = sqlx::query_as::<_, VenueRow>(&sql)
            .bind(place_id)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch venues of place {}: {:?}", place_id, e);
                AppError::Database(e)
            })?;

        Ok(rows.into_iter().map(Venue::from).collect())
    }
}

/// Candidate filter conditions, numbered from `$first`. Bind with [`bind_filter`].
fn filter_clause(first: usize) -> String {
    let scheduled = first;
    let spots = first + 1;
    let price = first + 2;
    let categories = first + 3;
    let amenities = first + 4;
    let labels = first + 5;

    format!(
        "(${scheduled}::BOOLEAN = FALSE OR t.id IS NOT NULL) \
         AND (${spots}::BOOLEAN = FALSE \
              OR EXISTS(SELECT 1 FROM venue_spots s WHERE s.venue_id = v.id)) \
         AND (${price}::INT IS NULL OR v.price_target = ${price}) \
         AND ((cardinality(${categories}::INT[]) = 0 AND cardinality(${amenities}::INT[]) = 0) \
              OR v.category_id = ANY(${categories}) \
              OR EXISTS(SELECT 1 FROM venue_category_links cl \
                        WHERE cl.venue_id = v.id AND cl.category_id = ANY(${categories})) \
              OR EXISTS(SELECT 1 FROM venue_amenity_links al \
                        WHERE al.venue_id = v.id AND al.amenity_id = ANY(${amenities}))) \
         AND (cardinality(${labels}::TEXT[]) = 0 \
              OR c.en = ANY(${labels}) \
              OR EXISTS(SELECT 1 FROM venue_category_links cl \
                        JOIN venue_categories vc ON vc.id = cl.category_id \
                        WHERE cl.venue_id = v.id AND vc.en = ANY(${labels})))"
    )
}

fn bind_filter<'q>(
    query: QueryAs<'q, Postgres, VenueRow, PgArguments>,
    filter: &CandidateFilter,
) -> QueryAs<'q, Postgres, VenueRow, PgArguments> {
    query
        .bind(filter.scheduled)
        .bind(filter.has_spots)
        .bind(filter.price_target)
        .bind(filter.category_ids.clone())
        .bind(filter.amenity_ids.clone())
        .bind(filter.category_labels.clone())
}

/// Escape LIKE wildcards so the user value matches literally
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("bar"), "bar");
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_filter_clause_numbers_parameters_from_offset() {
        let clause = filter_clause(7);
        assert!(clause.contains("$7::BOOLEAN = FALSE OR t.id IS NOT NULL"));
        assert!(clause.contains("$9::INT IS NULL OR v.price_target = $9"));
        assert!(clause.contains("cardinality($12::TEXT[]) = 0"));
        assert!(!clause.contains("$6"));
        assert!(!clause.contains("$13"));

        assert!(filter_clause(2).contains("$2::BOOLEAN"));
    }
}
