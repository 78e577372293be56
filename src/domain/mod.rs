//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod week;

pub use entities::{GroupPart, Lesson, LessonDetail, LessonPart, ScheduleDay, StudentGroup};
pub use errors::DomainError;
pub use week::WeekRange;
