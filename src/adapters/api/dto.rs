//! Wire DTOs for the schedule REST API, mapped into domain types here so
//! the core never sees wire field names.

use std::fmt;

use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::domain::{
    DomainError, GroupPart, Lesson, LessonDetail, LessonPart, ScheduleDay, StudentGroup,
};

/// Wire sentinel for "the whole group attends together".
const WHOLE_GROUP_KEY: &str = "FULL";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentGroupDto {
    pub group_name: String,
    pub course: u32,
    pub specialty_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDayDto {
    pub lesson_date: String,
    pub weekday: String,
    pub lessons: Vec<LessonDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonDto {
    pub lesson_number: u32,
    pub time: String,
    /// Part order is rendering-significant; a plain map type would lose the
    /// document order, so the entries are collected as they appear.
    #[serde(deserialize_with = "group_parts_in_order")]
    pub group_parts: Vec<(String, LessonPartDto)>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonPartDto {
    pub subject: String,
    pub teacher: String,
    pub teacher_position: String,
    pub classroom: String,
    pub building: String,
    pub address: String,
}

fn group_parts_in_order<'de, D>(deserializer: D) -> Result<Vec<(String, LessonPartDto)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PartsVisitor;

    impl<'de> Visitor<'de> for PartsVisitor {
        type Value = Vec<(String, LessonPartDto)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of group part keys to lesson details")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut parts = Vec::with_capacity(access.size_hint().unwrap_or(1));
            while let Some(entry) = access.next_entry()? {
                parts.push(entry);
            }
            Ok(parts)
        }
    }

    deserializer.deserialize_map(PartsVisitor)
}

pub fn map_group(dto: StudentGroupDto) -> StudentGroup {
    StudentGroup {
        name: dto.group_name,
        course: dto.course,
        specialty: dto.specialty_name,
    }
}

pub fn map_day(dto: ScheduleDayDto) -> Result<ScheduleDay, DomainError> {
    let date = NaiveDate::parse_from_str(&dto.lesson_date, "%Y-%m-%d").map_err(|e| {
        DomainError::Remote(format!("bad lessonDate '{}': {e}", dto.lesson_date))
    })?;
    Ok(ScheduleDay {
        date,
        weekday: dto.weekday,
        lessons: dto.lessons.into_iter().map(map_lesson).collect(),
    })
}

fn map_lesson(dto: LessonDto) -> Lesson {
    Lesson {
        number: dto.lesson_number,
        time: dto.time,
        parts: dto
            .group_parts
            .into_iter()
            .map(|(key, detail)| LessonPart {
                part: if key == WHOLE_GROUP_KEY {
                    GroupPart::Whole
                } else {
                    GroupPart::Subgroup(key)
                },
                detail: map_detail(detail),
            })
            .collect(),
    }
}

fn map_detail(dto: LessonPartDto) -> LessonDetail {
    LessonDetail {
        subject: dto.subject,
        teacher: dto.teacher,
        teacher_position: dto.teacher_position,
        classroom: dto.classroom,
        building: dto.building,
        address: dto.address,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_JSON: &str = r#"{
        "lessonDate": "2025-01-06",
        "weekday": "Monday",
        "lessons": [
            {
                "lessonNumber": 1,
                "time": "08:30-10:00",
                "groupParts": {
                    "2": {
                        "subject": "Databases",
                        "teacher": "I. Petrov",
                        "teacherPosition": "lecturer",
                        "classroom": "214",
                        "building": "B",
                        "address": "12 College St"
                    },
                    "FULL": {
                        "subject": "Mathematics",
                        "teacher": "A. Ivanova",
                        "teacherPosition": "professor",
                        "classroom": "101",
                        "building": "A",
                        "address": "12 College St"
                    }
                }
            }
        ]
    }"#;

    #[test]
    fn day_parses_and_maps_with_part_order_preserved() {
        let dto: ScheduleDayDto = serde_json::from_str(DAY_JSON).unwrap();
        let day = map_day(dto).unwrap();

        assert_eq!(day.date, NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
        assert_eq!(day.weekday, "Monday");
        let lesson = &day.lessons[0];
        assert_eq!(lesson.number, 1);
        assert_eq!(lesson.time, "08:30-10:00");
        // document order: subgroup "2" first, then the whole-group sentinel
        assert_eq!(lesson.parts[0].part, GroupPart::Subgroup("2".to_string()));
        assert_eq!(lesson.parts[0].detail.subject, "Databases");
        assert_eq!(lesson.parts[1].part, GroupPart::Whole);
        assert_eq!(lesson.parts[1].detail.teacher, "A. Ivanova");
    }

    #[test]
    fn group_list_element_maps_field_names() {
        let json = r#"{"groupName": "CS-101", "course": 1, "specialtyName": "Computing"}"#;
        let dto: StudentGroupDto = serde_json::from_str(json).unwrap();
        let group = map_group(dto);
        assert_eq!(group.name, "CS-101");
        assert_eq!(group.course, 1);
        assert_eq!(group.specialty, "Computing");
    }

    #[test]
    fn malformed_lesson_date_is_a_remote_error() {
        let dto = ScheduleDayDto {
            lesson_date: "06.01.2025".to_string(),
            weekday: "Monday".to_string(),
            lessons: vec![],
        };
        match map_day(dto) {
            Err(DomainError::Remote(msg)) => assert!(msg.contains("lessonDate")),
            other => panic!("expected remote error, got {other:?}"),
        }
    }
}
