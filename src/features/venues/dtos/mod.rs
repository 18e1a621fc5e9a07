mod search_dto;
mod venue_dto;

pub use search_dto::{CoordinateDto, NameSearchDto, RankedVenuesDto, SearchVenuesDto, SpotSearchDto};
pub use venue_dto::{
    LocationDto, TimetableScope, TimetableView, VenueDetailDto, VenueRankDto, VenueSummaryDto,
};
