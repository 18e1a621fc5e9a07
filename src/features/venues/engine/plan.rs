use chrono::NaiveDateTime;

use super::filters::{ExperienceType, FilterChain, Predicate};
use super::geo::{distance_to, GeoScope};
use super::ranking::{page, ScoredVenue, SortOrder};
use crate::core::config::SearchConfig;
use crate::features::venues::models::{Coordinate, Venue};

/// Inputs of one geo-temporal search, already validated by the caller
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    pub origin: Option<Coordinate>,
    pub place_id: Option<String>,
    /// Caller's local wall-clock time
    pub instant: Option<NaiveDateTime>,
    pub experience: Option<ExperienceType>,
    pub category_ids: Vec<i32>,
    pub amenity_ids: Vec<i32>,
    pub price_target: Option<i32>,
    pub closed_too: bool,
}

/// What to fetch, how to narrow it and how to order it
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPlan {
    pub scope: GeoScope,
    pub origin: Option<Coordinate>,
    pub chain: FilterChain,
    pub order: SortOrder,
}

impl SearchPlan {
    /// Plan for the main venue search.
    ///
    /// Returns `None` when the criteria cannot match anything: no place and
    /// no coordinate, or an open-now search without an instant.
    pub fn for_search(criteria: &SearchCriteria, config: &SearchConfig) -> Option<Self> {
        let scope = GeoScope::select(
            criteria.place_id.as_deref(),
            criteria.origin,
            config.radius_not_in_city_meters,
        )?;

        let mut chain = base_chain(&scope).and(Predicate::Scheduled);

        if !criteria.category_ids.is_empty() || !criteria.amenity_ids.is_empty() {
            chain = chain.and(Predicate::CategoryOrAmenity {
                category_ids: criteria.category_ids.clone(),
                amenity_ids: criteria.amenity_ids.clone(),
            });
        }

        if let Some(tier) = criteria.price_target {
            chain = chain.and(Predicate::PriceTier(tier));
        }

        if let Some(experience) = criteria.experience {
            let labels = experience.categories();
            if !labels.is_empty() {
                chain = chain.and(Predicate::CategoryNamed(labels));
            }
        }

        if !criteria.closed_too {
            let instant = criteria.instant?;
            let cutoff = config.day_cutoff;

            chain = chain.and(match criteria.experience {
                Some(ExperienceType::Tonight) => Predicate::OpenTonight {
                    instant,
                    cutoff,
                    threshold: config.tonight_threshold,
                },
                _ => Predicate::OpenAt { instant, cutoff },
            });
        }

        let order = match criteria.experience {
            Some(experience) if experience.ranks_by_popularity() => SortOrder::Popular,
            _ => SortOrder::Nearest,
        };

        Some(Self {
            scope,
            origin: criteria.origin,
            chain,
            order,
        })
    }

    /// Approved venues around a point, closest first
    pub fn nearest(origin: Coordinate, config: &SearchConfig) -> Self {
        let scope = GeoScope::Radius {
            origin,
            meters: config.nearest_radius_meters,
        };

        Self {
            chain: base_chain(&scope),
            scope,
            origin: Some(origin),
            order: SortOrder::Distance,
        }
    }

    /// Approved venues with at least one spot, in a city or around a point
    pub fn spots(origin: Coordinate, place_id: Option<&str>, config: &SearchConfig) -> Self {
        let scope = match place_id {
            Some(place_id) => GeoScope::City {
                place_id: place_id.to_string(),
            },
            None => GeoScope::Radius {
                origin,
                meters: config.radius_not_in_city_meters,
            },
        };

        Self {
            chain: base_chain(&scope).and(Predicate::HasSpots),
            scope,
            origin: Some(origin),
            order: SortOrder::Distance,
        }
    }

    /// Run the chain over `candidates`, sort the survivors and cut one page.
    /// Paging always happens after the full filter and sort.
    pub fn execute(&self, candidates: Vec<Venue>, offset: i64, page_size: i64) -> Vec<ScoredVenue> {
        let mut matched: Vec<ScoredVenue> = candidates
            .into_iter()
            .filter(|venue| self.chain.matches(venue))
            .map(|venue| ScoredVenue {
                distance: distance_to(self.origin, &venue),
                venue,
            })
            .collect();

        self.order.sort(&mut matched);
        page(matched, offset, page_size)
    }
}

/// Predicates shared by every geo listing
fn base_chain(scope: &GeoScope) -> FilterChain {
    let geo = match scope {
        GeoScope::City { place_id } => Predicate::CityMatch(place_id.clone()),
        GeoScope::Radius { origin, meters } => Predicate::WithinRadius {
            origin: *origin,
            meters: *meters,
        },
    };

    FilterChain::new()
        .and(Predicate::Approved)
        .and(Predicate::Located)
        .and(geo)
}
