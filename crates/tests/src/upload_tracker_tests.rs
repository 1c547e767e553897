use pretty_assertions::assert_eq;
use shared_types::{BillSlot, SlotPhase, UploadTracker};

#[test]
fn fresh_tracker_reports_every_slot_idle() {
    let tracker = UploadTracker::new();
    for slot in BillSlot::ALL {
        assert_eq!(tracker.phase("u1", slot), SlotPhase::Idle);
        assert!(!tracker.is_uploading("u1", slot));
    }
}

#[test]
fn upload_lifecycle_idle_uploading_success_idle() {
    let mut tracker = UploadTracker::new();

    let began = tracker.begin("u1", BillSlot::BillInfo);
    assert!(began.is_some());
    assert_eq!(tracker.phase("u1", BillSlot::BillInfo), SlotPhase::Uploading);

    let epoch = tracker.succeed("u1", BillSlot::BillInfo);
    assert_eq!(tracker.phase("u1", BillSlot::BillInfo), SlotPhase::Success);

    tracker.expire("u1", BillSlot::BillInfo, epoch);
    assert_eq!(tracker.phase("u1", BillSlot::BillInfo), SlotPhase::Idle);
}

#[test]
fn success_on_one_slot_leaves_other_slots_and_users_alone() {
    let mut tracker = UploadTracker::new();
    tracker.begin("u1", BillSlot::BillInfo);
    tracker.begin("u2", BillSlot::BillDocument);

    tracker.succeed("u1", BillSlot::BillInfo);

    // Same user, other slot: untouched.
    assert_eq!(tracker.phase("u1", BillSlot::BillDocument), SlotPhase::Idle);
    // Other user, same slot name: untouched.
    assert_eq!(tracker.phase("u2", BillSlot::BillInfo), SlotPhase::Idle);
    // Other user's in-flight upload: untouched.
    assert_eq!(
        tracker.phase("u2", BillSlot::BillDocument),
        SlotPhase::Uploading
    );
}

#[test]
fn concurrent_uploads_on_the_same_slot_are_refused() {
    let mut tracker = UploadTracker::new();
    assert!(tracker.begin("u1", BillSlot::BillInfo).is_some());
    assert!(tracker.begin("u1", BillSlot::BillInfo).is_none());

    // The other slot still accepts one.
    assert!(tracker.begin("u1", BillSlot::BillDocument).is_some());
}

#[test]
fn stale_badge_expiry_never_clobbers_a_newer_upload() {
    let mut tracker = UploadTracker::new();
    tracker.begin("u1", BillSlot::BillInfo);
    let first = tracker.succeed("u1", BillSlot::BillInfo);

    // A new upload starts before the 3000-unit expiry fires.
    tracker.begin("u1", BillSlot::BillInfo);
    tracker.expire("u1", BillSlot::BillInfo, first);
    assert_eq!(tracker.phase("u1", BillSlot::BillInfo), SlotPhase::Uploading);
}

#[test]
fn failure_stores_the_resolved_message_and_clears_uploading() {
    let mut tracker = UploadTracker::new();
    tracker.begin("u1", BillSlot::BillInfo);
    tracker.fail("u1", BillSlot::BillInfo, "File size must be less than 10MB");

    assert!(!tracker.is_uploading("u1", BillSlot::BillInfo));
    assert_eq!(
        tracker.phase("u1", BillSlot::BillInfo),
        SlotPhase::Error("File size must be less than 10MB".to_string())
    );
}

#[test]
fn terminal_transitions_bump_the_input_remount_epoch() {
    let mut tracker = UploadTracker::new();
    let start = tracker.epoch("u1", BillSlot::BillInfo);

    tracker.begin("u1", BillSlot::BillInfo);
    tracker.succeed("u1", BillSlot::BillInfo);
    let after_success = tracker.epoch("u1", BillSlot::BillInfo);
    assert!(after_success > start);

    tracker.begin("u1", BillSlot::BillInfo);
    tracker.fail("u1", BillSlot::BillInfo, "nope");
    assert!(tracker.epoch("u1", BillSlot::BillInfo) > after_success);
}
