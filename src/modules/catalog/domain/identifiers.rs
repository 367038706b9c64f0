use crate::shared::domain::identifier::identifier;

identifier!(
    /// Identifier of a category
    CategoryId
);

identifier!(
    /// Identifier of a genre
    GenreId
);

identifier!(
    /// Identifier of a cast member
    CastMemberId
);
