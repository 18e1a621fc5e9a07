// =============================================================================
// PAGE SIZES
// =============================================================================

/// Page size of the geo-temporal venue search
pub const BUSINESS_LIST: i64 = 6;

/// Page size of the name search and of the "nearest venues" listing
pub const SEARCH_BUSINESS_LIMIT: i64 = 10;

/// Page size of the spot-linked venue search
pub const BUSINESS_SPOT_LIMIT: i64 = 8;

// =============================================================================
// RANKING
// =============================================================================

/// Only the first N venues of a place + category carry a rank
pub const RANK_WINDOW: usize = 10;
