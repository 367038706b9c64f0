use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::Arc;

use crate::modules::catalog::domain::{CastMemberGateway, CategoryGateway, GenreGateway};
use crate::modules::video::domain::VideoMetadata;
use crate::shared::errors::AppResult;
use crate::shared::validation::{ValidationError, ValidationHandler};

/// Checks that every category, genre and cast member a video refers to
/// exists. Empty sets are not sent to their gateway.
#[derive(Clone)]
pub struct RelatedAggregatesValidator {
    category_gateway: Arc<dyn CategoryGateway>,
    genre_gateway: Arc<dyn GenreGateway>,
    cast_member_gateway: Arc<dyn CastMemberGateway>,
}

impl RelatedAggregatesValidator {
    pub fn new(
        category_gateway: Arc<dyn CategoryGateway>,
        genre_gateway: Arc<dyn GenreGateway>,
        cast_member_gateway: Arc<dyn CastMemberGateway>,
    ) -> Self {
        Self {
            category_gateway,
            genre_gateway,
            cast_member_gateway,
        }
    }

    /// Append one error per kind of reference with missing ids, in the
    /// order categories, genres, cast members
    pub async fn validate(
        &self,
        metadata: &VideoMetadata,
        handler: &mut (dyn ValidationHandler + Send),
    ) -> AppResult<()> {
        if !metadata.categories.is_empty() {
            let ids = sorted(&metadata.categories);
            let found = self.category_gateway.exists_by_ids(&ids).await?;
            append_missing(handler, "categories", ids, found)?;
        }

        if !metadata.genres.is_empty() {
            let ids = sorted(&metadata.genres);
            let found = self.genre_gateway.exists_by_ids(&ids).await?;
            append_missing(handler, "genres", ids, found)?;
        }

        if !metadata.cast_members.is_empty() {
            let ids = sorted(&metadata.cast_members);
            let found = self.cast_member_gateway.exists_by_ids(&ids).await?;
            append_missing(handler, "cast members", ids, found)?;
        }

        Ok(())
    }
}

fn sorted<I: Ord + Clone>(ids: &HashSet<I>) -> Vec<I> {
    let mut ids: Vec<I> = ids.iter().cloned().collect();
    ids.sort();
    ids
}

fn append_missing<I>(
    handler: &mut dyn ValidationHandler,
    aggregate: &str,
    requested: Vec<I>,
    found: Vec<I>,
) -> AppResult<()>
where
    I: Eq + Hash + Display,
{
    let found: HashSet<I> = found.into_iter().collect();
    let missing: Vec<String> = requested
        .into_iter()
        .filter(|id| !found.contains(id))
        .map(|id| id.to_string())
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    handler.append(ValidationError::new(format!(
        "Some {} could not be found: {}",
        aggregate,
        missing.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::{CategoryId, GenreId};
    use crate::modules::video::application::mocks::{
        untouched_catalog, MockCastMemberGateway, MockCategoryGateway, MockGenreGateway,
    };
    use crate::shared::validation::Notification;

    #[tokio::test]
    async fn test_empty_sets_never_reach_gateways() {
        let (categories, genres, cast_members) = untouched_catalog();
        let validator =
            RelatedAggregatesValidator::new(Arc::new(categories), Arc::new(genres), Arc::new(cast_members));
        let mut notification = Notification::create();

        validator
            .validate(&VideoMetadata::default(), &mut notification)
            .await
            .unwrap();

        assert!(!notification.has_error());
    }

    #[tokio::test]
    async fn test_reports_missing_ids_sorted() {
        let mut categories = MockCategoryGateway::new();
        categories
            .expect_exists_by_ids()
            .times(1)
            .returning(|_| Ok(vec![CategoryId::from("cat-2")]));
        let mut genres = MockGenreGateway::new();
        genres
            .expect_exists_by_ids()
            .times(1)
            .returning(|ids| Ok(ids.to_vec()));
        let mut cast_members = MockCastMemberGateway::new();
        cast_members.expect_exists_by_ids().never();

        let validator = RelatedAggregatesValidator::new(
            Arc::new(categories),
            Arc::new(genres),
            Arc::new(cast_members),
        );
        let metadata = VideoMetadata {
            categories: HashSet::from([
                CategoryId::from("cat-3"),
                CategoryId::from("cat-1"),
                CategoryId::from("cat-2"),
            ]),
            genres: HashSet::from([GenreId::from("gen-1")]),
            ..Default::default()
        };
        let mut notification = Notification::create();

        validator.validate(&metadata, &mut notification).await.unwrap();

        assert_eq!(notification.errors().len(), 1);
        assert_eq!(
            notification.errors()[0].message,
            "Some categories could not be found: cat-1, cat-3"
        );
    }
}
