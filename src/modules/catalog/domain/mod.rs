pub mod gateways;
pub mod identifiers;

pub use gateways::{CastMemberGateway, CategoryGateway, GenreGateway};
pub use identifiers::{CastMemberId, CategoryId, GenreId};
