//! Demo gateway for running without a configured schedule API.
//!
//! Returns canned groups and a generated week of lessons so the whole flow
//! can be exercised offline. Simulates network latency with a configurable
//! delay.

use std::time::Duration;

use chrono::{Datelike, Days, Weekday};
use tracing::info;

use crate::domain::{
    DomainError, GroupPart, Lesson, LessonDetail, LessonPart, ScheduleDay, StudentGroup,
    WeekRange,
};
use crate::ports::ScheduleGateway;

const SUBJECTS: &[&str] = &[
    "Mathematics",
    "Programming",
    "Databases",
    "Physics",
    "English",
    "Computer Networks",
];

const TEACHERS: &[(&str, &str)] = &[
    ("A. Ivanova", "professor"),
    ("I. Petrov", "lecturer"),
    ("M. Sokolova", "senior lecturer"),
];

pub struct DemoScheduleGateway {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
}

impl DemoScheduleGateway {
    /// Create a demo gateway with the default delay (100ms).
    pub fn new() -> Self {
        Self { delay_ms: 100 }
    }

    /// Create a demo gateway with a custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }

    fn lesson(&self, number: u32, time: &str, day_index: usize, split: bool) -> Lesson {
        let parts = if split {
            vec![
                self.part(GroupPart::Subgroup("1".to_string()), day_index, number),
                self.part(GroupPart::Subgroup("2".to_string()), day_index, number + 1),
            ]
        } else {
            vec![self.part(GroupPart::Whole, day_index, number)]
        };
        Lesson {
            number,
            time: time.to_string(),
            parts,
        }
    }

    fn part(&self, part: GroupPart, day_index: usize, salt: u32) -> LessonPart {
        let subject = SUBJECTS[(day_index + salt as usize) % SUBJECTS.len()];
        let (teacher, position) = TEACHERS[(day_index + salt as usize) % TEACHERS.len()];
        LessonPart {
            part,
            detail: LessonDetail {
                subject: subject.to_string(),
                teacher: teacher.to_string(),
                teacher_position: position.to_string(),
                classroom: format!("{}", 100 + (day_index as u32 * 7 + salt) % 30),
                building: "A".to_string(),
                address: "12 College St".to_string(),
            },
        }
    }
}

impl Default for DemoScheduleGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ScheduleGateway for DemoScheduleGateway {
    async fn get_all_groups(&self) -> Result<Vec<StudentGroup>, DomainError> {
        info!("[DEMO] serving canned group list");
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        Ok(vec![
            StudentGroup {
                name: "CS-101".to_string(),
                course: 1,
                specialty: "Computing".to_string(),
            },
            StudentGroup {
                name: "CS-202".to_string(),
                course: 2,
                specialty: "Computing".to_string(),
            },
            StudentGroup {
                name: "MA-201".to_string(),
                course: 2,
                specialty: "Mathematics".to_string(),
            },
        ])
    }

    async fn get_schedule(
        &self,
        group_name: &str,
        week: WeekRange,
    ) -> Result<Vec<ScheduleDay>, DomainError> {
        info!(
            group = group_name,
            start = %week.start_iso(),
            end = %week.end_iso(),
            "[DEMO] serving generated schedule"
        );
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        let mut days = Vec::new();
        let mut date = week.start;
        let mut day_index = 0usize;
        while date <= week.end {
            if date.weekday() != Weekday::Sun {
                days.push(ScheduleDay {
                    date,
                    weekday: date.format("%A").to_string(),
                    lessons: vec![
                        self.lesson(1, "08:30-10:00", day_index, false),
                        self.lesson(2, "10:15-11:45", day_index, true),
                    ],
                });
                day_index += 1;
            }
            date = match date.checked_add_days(Days::new(1)) {
                Some(next) => next,
                None => break,
            };
        }
        Ok(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn generated_week_skips_sunday_and_covers_the_range() {
        let gateway = DemoScheduleGateway::with_delay(1);
        let week = WeekRange::containing(NaiveDate::from_ymd_opt(2025, 1, 11).unwrap());
        // Saturday start: the span crosses a Sunday.
        let days = gateway.get_schedule("CS-101", week).await.unwrap();

        assert_eq!(days.len(), 6);
        assert!(days.iter().all(|d| d.date.weekday() != Weekday::Sun));
        assert_eq!(days.first().unwrap().date, week.start);
        assert_eq!(days.last().unwrap().date, week.end);
    }

    #[tokio::test]
    async fn canned_groups_have_unique_names() {
        let gateway = DemoScheduleGateway::with_delay(1);
        let groups = gateway.get_all_groups().await.unwrap();
        let mut names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), groups.len());
    }
}
