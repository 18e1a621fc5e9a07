use std::sync::Arc;

use crate::core::config::SearchConfig;
use crate::core::error::{AppError, Result};
use crate::features::venues::engine::{geo::distance_to, ScoredVenue, SearchCriteria, SearchPlan};
use crate::features::venues::models::Coordinate;
use crate::features::venues::store::VenueStore;
use crate::shared::constants::{BUSINESS_LIST, BUSINESS_SPOT_LIMIT, SEARCH_BUSINESS_LIMIT};

/// Geo-temporal search and the listings built on the same engine
pub struct VenueSearchService {
    store: Arc<dyn VenueStore>,
    config: SearchConfig,
}

impl VenueSearchService {
    pub fn new(store: Arc<dyn VenueStore>, config: SearchConfig) -> Self {
        Self { store, config }
    }

    /// One page of venues matching `criteria`. Criteria that cannot match
    /// anything yield an empty page.
    pub async fn search(&self, criteria: &SearchCriteria, offset: i64) -> Result<Vec<ScoredVenue>> {
        let Some(plan) = SearchPlan::for_search(criteria, &self.config) else {
            tracing::debug!("Venue search has no scope or instant, returning empty page");
            return Ok(Vec::new());
        };

        tracing::debug!(
            scope = ?plan.scope,
            order = ?plan.order,
            predicates = plan.chain.predicates().len(),
            offset,
            "Running venue search"
        );

        let candidates = self
            .store
            .fetch_candidates(&plan.scope, &plan.chain.candidate_filter())
            .await?;
        Ok(plan.execute(candidates, offset, BUSINESS_LIST))
    }

    /// Name search; an empty value lists the venues nearest to `origin`
    pub async fn search_by_name(
        &self,
        value: &str,
        origin: Option<Coordinate>,
        offset: i64,
    ) -> Result<Vec<ScoredVenue>> {
        let value = value.trim();

        if value.is_empty() {
            let origin = origin.ok_or_else(|| {
                AppError::Validation("Coordinate is required when the search value is empty".into())
            })?;
            let plan = SearchPlan::nearest(origin, &self.config);
            let candidates = self
            .store
            .fetch_candidates(&plan.scope, &plan.chain.candidate_filter())
            .await?;
            return Ok(plan.execute(candidates, offset, SEARCH_BUSINESS_LIMIT));
        }

        let venues = self
            .store
            .search_by_name(value, offset, SEARCH_BUSINESS_LIMIT)
            .await?;

        Ok(venues
            .into_iter()
            .map(|venue| ScoredVenue {
                distance: distance_to(origin, &venue),
                venue,
            })
            .collect())
    }

    /// Venues with at least one spot, in a city or around `origin`
    pub async fn search_spots(
        &self,
        origin: Coordinate,
        place_id: Option<&str>,
        offset: i64,
    ) -> Result<Vec<ScoredVenue>> {
        let plan = SearchPlan::spots(origin, place_id, &self.config);
        let candidates = self
            .store
            .fetch_candidates(&plan.scope, &plan.chain.candidate_filter())
            .await?;
        Ok(plan.execute(candidates, offset, BUSINESS_SPOT_LIMIT))
    }
}
