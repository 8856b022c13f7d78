pub mod aggregate;
pub mod dto;

pub use aggregate::Artwork;
pub use dto::{ArtworkListResponse, PaginationInfo};

/// Fixed page size of the catalog API listing
pub const PAGE_SIZE: usize = 12;
