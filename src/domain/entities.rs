//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/IO types here — these are mapped from adapters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A student group as published by the schedule service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentGroup {
    /// Unique group name, e.g. "CS-101". Also the favorites key.
    pub name: String,
    pub course: u32,
    pub specialty: String,
}

/// One day of the queried week: date, weekday label, ordered lessons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDay {
    pub date: NaiveDate,
    pub weekday: String,
    pub lessons: Vec<Lesson>,
}

/// A lesson slot. Parts keep the order the service returned them in;
/// the order only matters for rendering (separator between parts).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub number: u32,
    pub time: String,
    pub parts: Vec<LessonPart>,
}

/// One slice of a lesson slot: who attends, and the lesson details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPart {
    pub part: GroupPart,
    pub detail: LessonDetail,
}

/// Which subdivision of the group a lesson part applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupPart {
    /// The whole group attends together.
    Whole,
    /// A named subgroup, e.g. a lab half.
    Subgroup(String),
}

/// Display strings describing a lesson. The core never interprets these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonDetail {
    pub subject: String,
    pub teacher: String,
    pub teacher_position: String,
    pub classroom: String,
    pub building: String,
    pub address: String,
}
