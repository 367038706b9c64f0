use crate::shared::errors::AppResult;
/// Base traits for use cases following the CQRS split
///
/// Write operations implement `UseCase`, read operations implement `Query`.
///
/// # Example
///
/// ```ignore
/// struct DeleteVideoUseCase {
///     video_gateway: Arc<dyn VideoGateway>,
/// }
///
/// #[async_trait]
/// impl UseCase<DeleteVideoCommand, ()> for DeleteVideoUseCase {
///     async fn execute(&self, command: DeleteVideoCommand) -> AppResult<()> {
///         // Use case logic here
///     }
/// }
/// ```
use async_trait::async_trait;

/// Base trait for use cases (command handlers)
#[async_trait]
pub trait UseCase<TCommand, TResult> {
    /// Execute the use case with the given command
    async fn execute(&self, command: TCommand) -> AppResult<TResult>;
}

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
