//! The faculty/subject/class-group roster the allocator draws from.
//!
//! Lookups fail closed with `Option` because callers routinely probe
//! optionally-present relations; the typed not-found errors live with the
//! operations that need them.

use campuskit_models::dto::{NewClassGroup, NewFacultyMember, NewSubject};
use campuskit_models::{
    ClassGroup, ClassGroupId, FacultyId, FacultyMember, LectureKind, Subject, SubjectId,
};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// In-memory roster of everything assignable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    faculty: Vec<FacultyMember>,
    subjects: Vec<Subject>,
    class_groups: Vec<ClassGroup>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and add a subject, returning its freshly minted id.
    pub fn add_subject(&mut self, dto: NewSubject) -> Result<SubjectId, ValidationErrors> {
        dto.validate()?;
        let subject: Subject = dto.into();
        let id = subject.id;
        self.subjects.push(subject);
        Ok(id)
    }

    /// Validate and add a faculty member, returning their freshly minted id.
    pub fn add_faculty(&mut self, dto: NewFacultyMember) -> Result<FacultyId, ValidationErrors> {
        dto.validate()?;
        let member: FacultyMember = dto.into();
        let id = member.id;
        self.faculty.push(member);
        Ok(id)
    }

    /// Validate and add a class group, returning its freshly minted id.
    pub fn add_class_group(&mut self, dto: NewClassGroup) -> Result<ClassGroupId, ValidationErrors> {
        dto.validate()?;
        let group: ClassGroup = dto.into();
        let id = group.id;
        self.class_groups.push(group);
        Ok(id)
    }

    pub fn subject(&self, id: SubjectId) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    pub fn faculty_member(&self, id: FacultyId) -> Option<&FacultyMember> {
        self.faculty.iter().find(|f| f.id == id)
    }

    pub fn class_group(&self, id: ClassGroupId) -> Option<&ClassGroup> {
        self.class_groups.iter().find(|g| g.id == id)
    }

    /// Display name for a class group, tolerating ids the roster has never
    /// seen (e.g. background slots imported from another term).
    pub fn class_name(&self, id: ClassGroupId) -> String {
        self.class_group(id)
            .map(|g| g.name.clone())
            .unwrap_or_else(|| "another class".to_string())
    }

    /// All faculty members qualified to teach `subject_id`, in roster order.
    pub fn qualified_for(&self, subject_id: SubjectId) -> Vec<&FacultyMember> {
        self.faculty
            .iter()
            .filter(|f| f.can_teach(subject_id))
            .collect()
    }

    /// Theory subjects in roster order; the rotation order of auto-assign.
    pub fn theory_subjects(&self) -> Vec<&Subject> {
        self.subjects
            .iter()
            .filter(|s| s.kind == LectureKind::Theory)
            .collect()
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn faculty(&self) -> &[FacultyMember] {
        &self.faculty
    }

    pub fn class_groups(&self) -> &[ClassGroup] {
        &self.class_groups
    }
}
