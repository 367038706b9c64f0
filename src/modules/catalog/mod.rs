/// Catalog bounded context (categories, genres, cast members)
///
/// Only the identifiers and the existence-check contracts live here; the
/// video context validates its references through them.
pub mod domain;
pub mod infrastructure;

pub use domain::{CastMemberGateway, CastMemberId, CategoryGateway, CategoryId, GenreGateway, GenreId};
pub use infrastructure::InMemoryIdRegistry;
