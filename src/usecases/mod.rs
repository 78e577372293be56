//! Application use cases. Orchestrate domain logic via ports.

pub mod schedule_service;
pub mod selection;

pub use schedule_service::{LoadPhase, ScheduleService, ViewState};
pub use selection::SharedSelection;
