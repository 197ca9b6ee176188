//! Timetable rejection taxonomy.
//!
//! Every variant is a locally recoverable no-op: the grid is untouched when
//! an operation returns one of these. The display text is the exact message
//! shown to the user, naming the rejected action and the reason.

use campuskit_core::{Notice, Severity};
use campuskit_models::{ClassGroupId, FacultyId, LectureSlotId, SubjectId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimetableError {
    #[error("No class group is selected. Select a class group before editing its timetable")]
    NoSelection,

    #[error("Unknown class group: {0}")]
    UnknownClassGroup(ClassGroupId),

    #[error("Unknown lecture slot: {0}")]
    UnknownSlot(LectureSlotId),

    #[error("Unknown subject: {0}")]
    UnknownSubject(SubjectId),

    #[error("Unknown faculty member: {0}")]
    UnknownFaculty(FacultyId),

    #[error("Assign a subject to the slot before choosing a faculty member")]
    NoSubject(LectureSlotId),

    #[error("{faculty} is not qualified to teach {subject}")]
    NotQualified { faculty: String, subject: String },

    #[error("{faculty} already teaches {class_name} at {period}")]
    FacultyClash {
        faculty: String,
        class_name: String,
        period: String,
        clashing_slot: LectureSlotId,
    },

    #[error("The destination slot is already assigned. Remove its assignment first")]
    DestinationOccupied(LectureSlotId),

    #[error("Failed to save the timetable: {0}")]
    Store(#[from] anyhow::Error),
}

impl TimetableError {
    /// Severity of the user-facing notice for this rejection.
    pub fn severity(&self) -> Severity {
        match self {
            // Validation rejections: the user picked something the rules
            // forbid; the grid is unchanged.
            TimetableError::NoSelection
            | TimetableError::NoSubject(_)
            | TimetableError::NotQualified { .. }
            | TimetableError::FacultyClash { .. }
            | TimetableError::DestinationOccupied(_) => Severity::Warning,
            // Broken references and failed persistence.
            TimetableError::UnknownClassGroup(_)
            | TimetableError::UnknownSlot(_)
            | TimetableError::UnknownSubject(_)
            | TimetableError::UnknownFaculty(_)
            | TimetableError::Store(_) => Severity::Error,
        }
    }

    pub fn to_notice(&self) -> Notice {
        Notice::new(self.severity(), self.to_string())
    }
}

impl From<&TimetableError> for Notice {
    fn from(err: &TimetableError) -> Self {
        err.to_notice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clash_message_names_class_and_period() {
        let err = TimetableError::FacultyClash {
            faculty: "S. Menon".to_string(),
            class_name: "EE Third Year B".to_string(),
            period: "Monday 09:00 - 09:50".to_string(),
            clashing_slot: LectureSlotId::nil(),
        };
        let message = err.to_string();
        assert!(message.contains("EE Third Year B"));
        assert!(message.contains("Monday 09:00 - 09:50"));
        assert_eq!(err.severity(), Severity::Warning);
    }

    #[test]
    fn test_not_found_is_error_severity() {
        let err = TimetableError::UnknownFaculty(FacultyId::nil());
        assert_eq!(err.severity(), Severity::Error);
        assert_eq!(err.to_notice().severity, Severity::Error);
    }
}
