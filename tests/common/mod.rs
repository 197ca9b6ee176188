//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use campuskit::models::dto::{NewClassGroup, NewFacultyMember, NewSubject};
use campuskit::models::{ClassGroupId, FacultyId, LectureKind, SubjectId, standard_day};
use campuskit::timetable::{Allocator, Roster};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Initialize compact console logging once for the whole test binary.
/// Controlled by `RUST_LOG`; defaults to warn to keep test output quiet.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .with_test_writer()
            .init();
    });
}

/// Ids of everything the standard college fixture creates.
pub struct College {
    pub allocator: Allocator,
    pub cs_second_a: ClassGroupId,
    pub cs_second_b: ClassGroupId,
    pub algorithms: SubjectId,
    pub databases: SubjectId,
    pub discrete_math: SubjectId,
    pub os_lab: SubjectId,
    pub bose: FacultyId,
    pub das: FacultyId,
    pub iyer: FacultyId,
}

fn subject(name: &str, code: &str, kind: LectureKind) -> NewSubject {
    NewSubject {
        name: name.to_string(),
        code: code.to_string(),
        credit_weight: 4,
        kind,
    }
}

/// A small computer-science college: four subjects, three faculty members,
/// two sections of the second year.
pub fn college() -> College {
    init_tracing();
    let mut roster = Roster::new();

    let algorithms = roster
        .add_subject(subject("Algorithms", "CS-301", LectureKind::Theory))
        .expect("valid subject");
    let databases = roster
        .add_subject(subject("Databases", "CS-302", LectureKind::Theory))
        .expect("valid subject");
    let discrete_math = roster
        .add_subject(subject("Discrete Mathematics", "MA-201", LectureKind::Theory))
        .expect("valid subject");
    let os_lab = roster
        .add_subject(subject("Operating Systems Lab", "CS-351", LectureKind::Lab))
        .expect("valid subject");

    let bose = roster
        .add_faculty(NewFacultyMember {
            name: "A. Bose".to_string(),
            department: "Computer Science".to_string(),
            teachable: vec![algorithms, databases],
            is_department_head: true,
        })
        .expect("valid faculty");
    let das = roster
        .add_faculty(NewFacultyMember {
            name: "P. Das".to_string(),
            department: "Computer Science".to_string(),
            teachable: vec![algorithms, os_lab],
            is_department_head: false,
        })
        .expect("valid faculty");
    let iyer = roster
        .add_faculty(NewFacultyMember {
            name: "R. Iyer".to_string(),
            department: "Mathematics".to_string(),
            teachable: vec![discrete_math],
            is_department_head: false,
        })
        .expect("valid faculty");

    let cs_second_a = roster
        .add_class_group(NewClassGroup {
            name: "CS Second Year A".to_string(),
            year: 2,
            section: "A".to_string(),
            headcount: 62,
        })
        .expect("valid class group");
    let cs_second_b = roster
        .add_class_group(NewClassGroup {
            name: "CS Second Year B".to_string(),
            year: 2,
            section: "B".to_string(),
            headcount: 58,
        })
        .expect("valid class group");

    College {
        allocator: Allocator::new(roster, standard_day()),
        cs_second_a,
        cs_second_b,
        algorithms,
        databases,
        discrete_math,
        os_lab,
        bose,
        das,
        iyer,
    }
}
