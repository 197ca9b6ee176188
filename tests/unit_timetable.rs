mod common;

use campuskit::core::Severity;
use campuskit::models::SlotState;
use campuskit::timetable::{FacultyResolution, TimetableError};

#[test]
fn test_grid_lifecycle_select_and_reselect() {
    let mut college = common::college();
    let allocator = &mut college.allocator;

    allocator.select_class_group(college.cs_second_a).unwrap();
    assert_eq!(allocator.grid().len(), 6 * 8);
    let old_slot = allocator.grid()[0].id;

    // Reselection discards the old grid entirely
    allocator.select_class_group(college.cs_second_b).unwrap();
    assert!(allocator.slot(old_slot).is_none());
    assert!(allocator.grid().iter().all(|s| s.state() == SlotState::Empty));
}

#[test]
fn test_single_qualified_faculty_is_auto_assigned() {
    let mut college = common::college();
    let allocator = &mut college.allocator;
    allocator.select_class_group(college.cs_second_a).unwrap();
    let slot_id = allocator.grid()[0].id;

    // Only R. Iyer teaches Discrete Mathematics
    let outcome = allocator
        .assign_subject(slot_id, college.discrete_math)
        .unwrap();
    assert_eq!(
        outcome.resolution,
        FacultyResolution::AutoAssigned(college.iyer)
    );
    assert_eq!(outcome.notice.severity, Severity::Success);
    assert_eq!(
        allocator.slot(slot_id).unwrap().state(),
        SlotState::FullyAssigned
    );
}

#[test]
fn test_multiple_qualified_faculty_requires_explicit_choice() {
    let mut college = common::college();
    let allocator = &mut college.allocator;
    allocator.select_class_group(college.cs_second_a).unwrap();
    let slot_id = allocator.grid()[0].id;

    let outcome = allocator.assign_subject(slot_id, college.algorithms).unwrap();
    assert_eq!(
        outcome.resolution,
        FacultyResolution::Pending(vec![college.bose, college.das])
    );
    assert_eq!(
        allocator.slot(slot_id).unwrap().state(),
        SlotState::SubjectAssigned
    );

    allocator.assign_faculty(slot_id, college.das).unwrap();
    assert_eq!(
        allocator.slot(slot_id).unwrap().state(),
        SlotState::FullyAssigned
    );
}

#[test]
fn test_unqualified_faculty_is_rejected_as_noop() {
    let mut college = common::college();
    let allocator = &mut college.allocator;
    allocator.select_class_group(college.cs_second_a).unwrap();
    let slot_id = allocator.grid()[0].id;

    allocator.assign_subject(slot_id, college.algorithms).unwrap();
    let before = allocator.slot(slot_id).unwrap().clone();

    // R. Iyer does not teach Algorithms
    let err = allocator.assign_faculty(slot_id, college.iyer).unwrap_err();
    assert!(matches!(err, TimetableError::NotQualified { .. }));
    assert!(err.to_string().contains("R. Iyer"));
    assert_eq!(err.severity(), Severity::Warning);
    assert_eq!(allocator.slot(slot_id).unwrap(), &before);
}

#[test]
fn test_faculty_clash_scenario_names_the_other_class() {
    let mut college = common::college();
    let allocator = &mut college.allocator;

    // Section B already has A. Bose on Monday, first period
    allocator.select_class_group(college.cs_second_b).unwrap();
    let first_period = allocator.grid()[0].time_slot_id;
    let b_slot = allocator.slot_at(0, first_period).unwrap().id;
    allocator.assign_subject(b_slot, college.algorithms).unwrap();
    allocator.assign_faculty(b_slot, college.bose).unwrap();
    let section_b_saved = allocator.grid().to_vec();

    // Editing section A at the same period
    allocator.select_class_group(college.cs_second_a).unwrap();
    allocator.load_background(section_b_saved);
    let a_slot = allocator.slot_at(0, first_period).unwrap().id;
    allocator.assign_subject(a_slot, college.algorithms).unwrap();

    // Bose is rejected with a conflict naming section B
    let err = allocator.assign_faculty(a_slot, college.bose).unwrap_err();
    match &err {
        TimetableError::FacultyClash { class_name, .. } => {
            assert_eq!(class_name, "CS Second Year B")
        }
        other => panic!("expected FacultyClash, got {other:?}"),
    }

    // Das succeeds
    allocator.assign_faculty(a_slot, college.das).unwrap();
    assert_eq!(
        allocator.slot(a_slot).unwrap().state(),
        SlotState::FullyAssigned
    );
}

#[test]
fn test_assign_then_remove_round_trips_to_empty() {
    let mut college = common::college();
    let allocator = &mut college.allocator;
    allocator.select_class_group(college.cs_second_a).unwrap();
    let slot_id = allocator.grid()[0].id;
    let pristine = allocator.slot(slot_id).unwrap().clone();

    allocator.assign_subject(slot_id, college.discrete_math).unwrap();
    allocator
        .annotate(slot_id, Some("A-101".to_string()), Some("smartboard".to_string()))
        .unwrap();
    allocator.remove_assignment(slot_id).unwrap();

    let slot = allocator.slot(slot_id).unwrap();
    assert_eq!(slot, &pristine);
    assert_eq!(slot.state(), SlotState::Empty);
    assert!(slot.room.is_none());
    assert!(slot.notes.is_none());
}

#[test]
fn test_move_rejects_occupied_destination_with_warning() {
    let mut college = common::college();
    let allocator = &mut college.allocator;
    allocator.select_class_group(college.cs_second_a).unwrap();
    let from = allocator.grid()[0].id;
    let to = allocator.grid()[1].id;

    allocator.assign_subject(from, college.discrete_math).unwrap();
    allocator.assign_subject(to, college.databases).unwrap();

    let err = allocator.move_assignment(from, to).unwrap_err();
    assert!(matches!(err, TimetableError::DestinationOccupied(_)));
    assert_eq!(err.severity(), Severity::Warning);
    // Both slots untouched
    assert_eq!(allocator.slot(from).unwrap().subject_id, Some(college.discrete_math));
    assert_eq!(allocator.slot(to).unwrap().subject_id, Some(college.databases));
}

#[test]
fn test_conflict_detection_is_idempotent() {
    let mut college = common::college();
    let allocator = &mut college.allocator;
    allocator.select_class_group(college.cs_second_a).unwrap();
    allocator.auto_assign().unwrap();

    let first = allocator.detect_conflicts();
    let second = allocator.detect_conflicts();
    assert_eq!(first, second);
}

#[test]
fn test_unknown_ids_fail_closed() {
    let mut college = common::college();
    let allocator = &mut college.allocator;
    allocator.select_class_group(college.cs_second_a).unwrap();
    let slot_id = allocator.grid()[0].id;

    assert!(matches!(
        allocator.assign_subject(slot_id, campuskit::models::SubjectId::new()),
        Err(TimetableError::UnknownSubject(_))
    ));
    assert!(matches!(
        allocator.assign_faculty(campuskit::models::LectureSlotId::new(), college.bose),
        Err(TimetableError::UnknownSlot(_))
    ));
}
