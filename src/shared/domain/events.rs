use chrono::{DateTime, Utc};

/// Base trait for all domain events
///
/// Events are business-meaningful state changes recorded by an aggregate and
/// handed to the outside world after the aggregate has been persisted.
pub trait DomainEvent: Send + Sync {
    /// When the event occurred
    fn occurred_on(&self) -> DateTime<Utc>;

    /// Type of event (for serialization/routing)
    fn event_type(&self) -> &'static str;
}
