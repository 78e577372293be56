//! Schedule coordinator: group list, current selection, weekly lessons.
//!
//! - Defaults the selection when the group list loads (first group, or a
//!   restored name when one was supplied)
//! - Publishes user-made selections to the shared holder; reacts to
//!   selections made on the favorites screen without re-triggering itself
//! - Tags every schedule fetch with a monotonic token so a superseded
//!   response can never overwrite a newer selection's schedule
//! - Treats the favorites store as the source of truth: membership is
//!   re-read before every mutation

use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Local;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::domain::{DomainError, ScheduleDay, StudentGroup, WeekRange};
use crate::ports::{FavoritesPort, ScheduleGateway};
use crate::usecases::selection::SharedSelection;

/// Lifecycle of the schedule view. `Error` holds the user-facing message
/// and is left only by a new user-triggered load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Uninitialized,
    Loading,
    Ready,
    Error(String),
}

/// Everything the UI needs to render, cloned out as one snapshot.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub phase: LoadPhase,
    pub groups: Vec<StudentGroup>,
    pub selected: Option<StudentGroup>,
    pub schedule: Vec<ScheduleDay>,
}

/// Coordinates group selection, schedule fetches, and the favorites toggle.
pub struct ScheduleService {
    gateway: Arc<dyn ScheduleGateway>,
    favorites: Arc<dyn FavoritesPort>,
    selection: SharedSelection,
    state: RwLock<ViewState>,
    /// Bumped at every schedule fetch; completions with an older token are
    /// discarded.
    fetch_seq: AtomicU64,
}

impl ScheduleService {
    pub fn new(
        gateway: Arc<dyn ScheduleGateway>,
        favorites: Arc<dyn FavoritesPort>,
        selection: SharedSelection,
    ) -> Self {
        Self {
            gateway,
            favorites,
            selection,
            state: RwLock::new(ViewState::default()),
            fetch_seq: AtomicU64::new(0),
        }
    }

    /// Current view state, cloned for rendering.
    pub async fn snapshot(&self) -> ViewState {
        self.state.read().await.clone()
    }

    /// Currently selected group, if any.
    pub async fn selected(&self) -> Option<StudentGroup> {
        self.state.read().await.selected.clone()
    }

    /// Fetch the group list and default the selection.
    ///
    /// `restore` carries a previously chosen group name (e.g. from
    /// configuration); when it matches a loaded group it wins over the
    /// first-group default. Only a true first run — no prior selection, no
    /// restored name — publishes the default to the shared holder.
    pub async fn load_groups(&self, restore: Option<&str>) -> Result<(), DomainError> {
        self.state.write().await.phase = LoadPhase::Loading;

        let groups = match self.gateway.get_all_groups().await {
            Ok(groups) => groups,
            Err(e) => {
                self.fail(format!("failed to load groups: {e}")).await;
                return Err(e);
            }
        };
        info!(count = groups.len(), "group list loaded");

        if groups.is_empty() {
            self.fail("no groups available".to_string()).await;
            return Ok(());
        }

        let prior = self.state.read().await.selected.clone();
        let chosen = prior
            .as_ref()
            .and_then(|sel| groups.iter().find(|g| g.name == sel.name))
            .or_else(|| restore.and_then(|name| groups.iter().find(|g| g.name == name)))
            .unwrap_or(&groups[0])
            .clone();
        if let Some(name) = restore {
            if prior.is_none() && name != chosen.name {
                warn!(
                    requested = name,
                    fallback = %chosen.name,
                    "restored group not in the loaded list"
                );
            }
        }
        let first_run = prior.is_none() && restore.is_none();

        {
            let mut st = self.state.write().await;
            st.groups = groups;
            st.selected = Some(chosen.clone());
        }
        if first_run {
            self.selection.set(&chosen.name);
        }

        self.load_schedule(&chosen).await
    }

    /// Explicit user pick. Publishes to the shared holder so the favorites
    /// screen observes the change.
    pub async fn select_group(&self, name: &str) -> Result<(), DomainError> {
        let group = {
            let st = self.state.read().await;
            st.groups.iter().find(|g| g.name == name).cloned()
        }
        .ok_or_else(|| DomainError::NotFound(name.to_string()))?;

        self.state.write().await.selected = Some(group.clone());
        self.selection.set(&group.name);
        self.load_schedule(&group).await
    }

    /// The shared holder changed for a reason outside this coordinator —
    /// e.g. the favorites screen picked a group. Acts only when `name`
    /// differs from the current selection; otherwise a coordinator-initiated
    /// publish would re-trigger itself.
    pub async fn on_external_selection_changed(&self, name: &str) -> Result<(), DomainError> {
        let group = {
            let st = self.state.read().await;
            if st.groups.is_empty() {
                debug!(name, "external selection before group list loaded, ignoring");
                return Ok(());
            }
            if st.selected.as_ref().is_some_and(|g| g.name == name) {
                debug!(name, "external selection matches current, ignoring");
                return Ok(());
            }
            match st.groups.iter().find(|g| g.name == name) {
                Some(group) => group.clone(),
                None => {
                    debug!(name, "external selection not in loaded list, ignoring");
                    return Ok(());
                }
            }
        };

        self.state.write().await.selected = Some(group.clone());
        self.load_schedule(&group).await
    }

    /// Fetch the week's lessons for `group`. The week range is evaluated at
    /// call time. A completion whose token is no longer current, or whose
    /// group is no longer selected, is discarded.
    async fn load_schedule(&self, group: &StudentGroup) -> Result<(), DomainError> {
        let token = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.write().await.phase = LoadPhase::Loading;

        let week = WeekRange::containing(Local::now().date_naive());
        debug!(
            group = %group.name,
            start = %week.start_iso(),
            end = %week.end_iso(),
            "fetching schedule"
        );
        let result = self.gateway.get_schedule(&group.name, week).await;

        if self.fetch_seq.load(Ordering::SeqCst) != token {
            debug!(group = %group.name, "discarding superseded schedule response");
            return Ok(());
        }

        let mut st = self.state.write().await;
        if st.selected.as_ref().map(|g| g.name.as_str()) != Some(group.name.as_str()) {
            debug!(group = %group.name, "selection moved during fetch, discarding response");
            return Ok(());
        }

        match result {
            Ok(days) => {
                info!(group = %group.name, days = days.len(), "schedule loaded");
                st.schedule = days;
                st.phase = LoadPhase::Ready;
                Ok(())
            }
            Err(e) => {
                st.schedule.clear();
                st.phase = LoadPhase::Error(format!("failed to load schedule: {e}"));
                Err(e)
            }
        }
    }

    /// Add or remove `name` from the persisted favorites based on a fresh
    /// membership read. Returns the new membership.
    pub async fn toggle_favorite(&self, name: &str) -> Result<bool, DomainError> {
        let mut favorites = self.favorites.read().await?;
        let now_favorite = favorites.insert(name.to_string());
        if !now_favorite {
            favorites.remove(name);
        }
        self.favorites.write(&favorites).await?;
        info!(group = name, favorite = now_favorite, "favorite toggled");
        Ok(now_favorite)
    }

    /// Explicit removal from the favorites screen. No-op when absent.
    pub async fn remove_favorite(&self, name: &str) -> Result<(), DomainError> {
        let mut favorites = self.favorites.read().await?;
        if favorites.remove(name) {
            self.favorites.write(&favorites).await?;
            info!(group = name, "favorite removed");
        }
        Ok(())
    }

    /// Fresh read of the persisted favorites.
    pub async fn favorites(&self) -> Result<BTreeSet<String>, DomainError> {
        self.favorites.read().await
    }

    /// Membership test for the toggle affordance.
    pub async fn is_favorite(&self, name: &str) -> Result<bool, DomainError> {
        Ok(self.favorites.read().await?.contains(name))
    }

    /// Case-insensitive substring match on group name or specialty. An
    /// empty query returns the full list in original order.
    pub async fn filter_groups(&self, query: &str) -> Vec<StudentGroup> {
        let st = self.state.read().await;
        if query.is_empty() {
            return st.groups.clone();
        }
        let needle = query.to_lowercase();
        st.groups
            .iter()
            .filter(|g| {
                g.name.to_lowercase().contains(&needle)
                    || g.specialty.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    async fn fail(&self, message: String) {
        let mut st = self.state.write().await;
        st.schedule.clear();
        st.phase = LoadPhase::Error(message);
    }
}
