//! Per-row bill upload state.
//!
//! Every applicant row exposes two independent upload targets ("slots"):
//! the general bill-info PDF and the bill-document PDF. Slot state is kept
//! in an [`UploadTracker`] keyed by `(record id, slot)` so concurrent
//! uploads across slots and rows never interact.

use std::collections::HashMap;

/// MIME type accepted for bill uploads.
pub const PDF_MIME: &str = "application/pdf";

/// Upper bound on uploaded file size (10 MiB).
pub const MAX_PDF_BYTES: u64 = 10 * 1024 * 1024;

/// How long the per-slot success indicator stays visible.
pub const SUCCESS_BADGE_MS: u32 = 3000;

/// One of the two upload targets on an applicant row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BillSlot {
    /// General bill information PDF.
    BillInfo,
    /// The bill document itself.
    BillDocument,
}

impl BillSlot {
    pub const ALL: [BillSlot; 2] = [BillSlot::BillInfo, BillSlot::BillDocument];

    /// Wire name the backend expects for this slot.
    pub fn as_str(&self) -> &'static str {
        match self {
            BillSlot::BillInfo => "billInfo",
            BillSlot::BillDocument => "billUpload",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BillSlot::BillInfo => "Bill info",
            BillSlot::BillDocument => "Bill document",
        }
    }
}

/// Lifecycle of a single upload slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SlotPhase {
    #[default]
    Idle,
    Uploading,
    /// Shown transiently; reverts to idle after [`SUCCESS_BADGE_MS`].
    Success,
    Error(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
struct SlotEntry {
    phase: SlotPhase,
    /// Bumped on every transition; lets a stale expiry timer recognize
    /// that a newer upload has taken over the slot.
    epoch: u64,
}

/// Keyed store of slot states for the current page of rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadTracker {
    slots: HashMap<(String, BillSlot), SlotEntry>,
}

impl UploadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase for a slot; unknown slots are idle.
    pub fn phase(&self, user_id: &str, slot: BillSlot) -> SlotPhase {
        self.slots
            .get(&(user_id.to_string(), slot))
            .map(|entry| entry.phase.clone())
            .unwrap_or_default()
    }

    pub fn is_uploading(&self, user_id: &str, slot: BillSlot) -> bool {
        self.phase(user_id, slot) == SlotPhase::Uploading
    }

    /// Epoch of the slot; used to key the file input so terminal
    /// transitions remount it and the same file can be re-selected.
    pub fn epoch(&self, user_id: &str, slot: BillSlot) -> u64 {
        self.slots
            .get(&(user_id.to_string(), slot))
            .map(|entry| entry.epoch)
            .unwrap_or(0)
    }

    /// Mark the slot uploading and clear any prior error. Refuses (returns
    /// `None`) while an upload is already in flight on this slot.
    pub fn begin(&mut self, user_id: &str, slot: BillSlot) -> Option<u64> {
        let entry = self.entry(user_id, slot);
        if entry.phase == SlotPhase::Uploading {
            return None;
        }
        entry.phase = SlotPhase::Uploading;
        entry.epoch += 1;
        Some(entry.epoch)
    }

    /// Terminal success. Returns the new epoch for the expiry timer.
    pub fn succeed(&mut self, user_id: &str, slot: BillSlot) -> u64 {
        let entry = self.entry(user_id, slot);
        entry.phase = SlotPhase::Success;
        entry.epoch += 1;
        entry.epoch
    }

    /// Terminal failure with a resolved message.
    pub fn fail(&mut self, user_id: &str, slot: BillSlot, message: impl Into<String>) {
        let entry = self.entry(user_id, slot);
        entry.phase = SlotPhase::Error(message.into());
        entry.epoch += 1;
    }

    /// Revert a success indicator to idle, but only if no newer transition
    /// has happened on the slot since `epoch` was handed out.
    pub fn expire(&mut self, user_id: &str, slot: BillSlot, epoch: u64) {
        if let Some(entry) = self.slots.get_mut(&(user_id.to_string(), slot)) {
            if entry.epoch == epoch && entry.phase == SlotPhase::Success {
                entry.phase = SlotPhase::Idle;
            }
        }
    }

    fn entry(&mut self, user_id: &str, slot: BillSlot) -> &mut SlotEntry {
        self.slots
            .entry((user_id.to_string(), slot))
            .or_default()
    }
}

/// Validate a selected file before any network activity. Checks run in
/// order and the first failure wins.
pub fn validate_pdf(content_type: &str, size: u64) -> Result<(), String> {
    if content_type != PDF_MIME {
        return Err("Only PDF files are allowed".to_string());
    }
    if size > MAX_PDF_BYTES {
        return Err("File size must be less than 10MB".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_non_pdf_mime() {
        let err = validate_pdf("text/plain", 100).unwrap_err();
        assert_eq!(err, "Only PDF files are allowed");
    }

    #[test]
    fn validate_mime_check_runs_before_size_check() {
        let err = validate_pdf("image/png", MAX_PDF_BYTES + 1).unwrap_err();
        assert_eq!(err, "Only PDF files are allowed");
    }

    #[test]
    fn validate_boundary_sizes() {
        assert!(validate_pdf(PDF_MIME, 10_485_760).is_ok());
        let err = validate_pdf(PDF_MIME, 10_485_761).unwrap_err();
        assert_eq!(err, "File size must be less than 10MB");
    }

    #[test]
    fn begin_refuses_while_uploading() {
        let mut tracker = UploadTracker::new();
        assert!(tracker.begin("u1", BillSlot::BillInfo).is_some());
        assert!(tracker.begin("u1", BillSlot::BillInfo).is_none());
        assert!(tracker.is_uploading("u1", BillSlot::BillInfo));
    }

    #[test]
    fn begin_clears_prior_error() {
        let mut tracker = UploadTracker::new();
        tracker.fail("u1", BillSlot::BillInfo, "Only PDF files are allowed");
        assert!(tracker.begin("u1", BillSlot::BillInfo).is_some());
        assert_eq!(tracker.phase("u1", BillSlot::BillInfo), SlotPhase::Uploading);
    }

    #[test]
    fn slots_are_independent_across_slots_and_users() {
        let mut tracker = UploadTracker::new();
        tracker.begin("u1", BillSlot::BillInfo);
        tracker.succeed("u1", BillSlot::BillInfo);

        assert_eq!(tracker.phase("u1", BillSlot::BillInfo), SlotPhase::Success);
        assert_eq!(tracker.phase("u1", BillSlot::BillDocument), SlotPhase::Idle);
        assert_eq!(tracker.phase("u2", BillSlot::BillInfo), SlotPhase::Idle);
    }

    #[test]
    fn expire_reverts_success_with_matching_epoch() {
        let mut tracker = UploadTracker::new();
        tracker.begin("u1", BillSlot::BillInfo);
        let epoch = tracker.succeed("u1", BillSlot::BillInfo);
        tracker.expire("u1", BillSlot::BillInfo, epoch);
        assert_eq!(tracker.phase("u1", BillSlot::BillInfo), SlotPhase::Idle);
    }

    #[test]
    fn stale_expiry_does_not_touch_newer_upload() {
        let mut tracker = UploadTracker::new();
        tracker.begin("u1", BillSlot::BillInfo);
        let first_success = tracker.succeed("u1", BillSlot::BillInfo);

        // A second upload starts on the same slot before the first badge expires.
        tracker.begin("u1", BillSlot::BillInfo);
        tracker.expire("u1", BillSlot::BillInfo, first_success);
        assert_eq!(tracker.phase("u1", BillSlot::BillInfo), SlotPhase::Uploading);

        // And its own success expires normally.
        let second_success = tracker.succeed("u1", BillSlot::BillInfo);
        tracker.expire("u1", BillSlot::BillInfo, second_success);
        assert_eq!(tracker.phase("u1", BillSlot::BillInfo), SlotPhase::Idle);
    }

    #[test]
    fn failure_records_message() {
        let mut tracker = UploadTracker::new();
        tracker.begin("u1", BillSlot::BillDocument);
        tracker.fail("u1", BillSlot::BillDocument, "Upload failed");
        assert_eq!(
            tracker.phase("u1", BillSlot::BillDocument),
            SlotPhase::Error("Upload failed".to_string())
        );
    }

    #[test]
    fn slot_wire_names() {
        assert_eq!(BillSlot::BillInfo.as_str(), "billInfo");
        assert_eq!(BillSlot::BillDocument.as_str(), "billUpload");
    }
}
