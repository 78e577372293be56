//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use std::collections::BTreeSet;

use tokio::sync::watch;

use crate::domain::{DomainError, ScheduleDay, StudentGroup, WeekRange};

/// Schedule service gateway. Fetch the group list and weekly lessons.
#[async_trait::async_trait]
pub trait ScheduleGateway: Send + Sync {
    /// Fetch every student group known to the service.
    async fn get_all_groups(&self) -> Result<Vec<StudentGroup>, DomainError>;

    /// Fetch the lessons for `group_name` over the given week. The service
    /// returns one element per day that falls inside [start, end].
    async fn get_schedule(
        &self,
        group_name: &str,
        week: WeekRange,
    ) -> Result<Vec<ScheduleDay>, DomainError>;
}

/// Favorites store. A durable set of group names, observable as a stream
/// of updates.
///
/// The store is the source of truth: callers re-read membership instead of
/// caching a copy across screens. `write` replaces the whole set, so add
/// and remove are naturally idempotent.
#[async_trait::async_trait]
pub trait FavoritesPort: Send + Sync {
    /// Read the persisted set.
    async fn read(&self) -> Result<BTreeSet<String>, DomainError>;

    /// Replace the persisted set.
    async fn write(&self, favorites: &BTreeSet<String>) -> Result<(), DomainError>;

    /// Observe updates. The receiver yields the set as of each write.
    fn subscribe(&self) -> watch::Receiver<BTreeSet<String>>;
}
