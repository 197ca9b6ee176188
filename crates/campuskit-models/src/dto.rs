//! Setup DTOs with validation.
//!
//! Roster entries arrive from setup forms; these DTOs validate the raw input
//! before an entity (with a freshly minted id) is built from them.

use crate::ids::SubjectId;
use crate::timetable::{ClassGroup, FacultyMember, LectureKind, Subject};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct NewClassGroup {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,
    #[validate(range(min = 1, max = 6, message = "Year must be between 1 and 6"))]
    pub year: u8,
    #[validate(length(min = 1, max = 10, message = "Section must be between 1 and 10 characters"))]
    pub section: String,
    #[validate(range(min = 1, message = "Headcount must be at least 1"))]
    pub headcount: u16,
}

impl From<NewClassGroup> for ClassGroup {
    fn from(dto: NewClassGroup) -> Self {
        ClassGroup {
            id: crate::ids::ClassGroupId::new(),
            name: dto.name,
            year: dto.year,
            section: dto.section,
            headcount: dto.headcount,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewSubject {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,
    #[validate(length(min = 2, max = 12, message = "Code must be between 2 and 12 characters"))]
    pub code: String,
    #[validate(range(min = 1, max = 10, message = "Credit weight must be between 1 and 10"))]
    pub credit_weight: u8,
    pub kind: LectureKind,
}

impl From<NewSubject> for Subject {
    fn from(dto: NewSubject) -> Self {
        Subject {
            id: SubjectId::new(),
            name: dto.name,
            code: dto.code,
            credit_weight: dto.credit_weight,
            kind: dto.kind,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewFacultyMember {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,
    #[validate(length(
        min = 1,
        max = 100,
        message = "Department must be between 1 and 100 characters"
    ))]
    pub department: String,
    /// Subjects this member is qualified to teach.
    pub teachable: Vec<SubjectId>,
    #[serde(default)]
    pub is_department_head: bool,
}

impl From<NewFacultyMember> for FacultyMember {
    fn from(dto: NewFacultyMember) -> Self {
        FacultyMember {
            id: crate::ids::FacultyId::new(),
            name: dto.name,
            department: dto.department,
            teachable: dto.teachable.into_iter().collect(),
            is_department_head: dto.is_department_head,
        }
    }
}
