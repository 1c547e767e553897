use pretty_assertions::assert_eq;
use shared_types::{BillStatus, UserListResponse, UserRecord};

use crate::common::*;

// ── Rendering scenario ──────────────────────────────────

#[test]
fn scenario_single_verified_row_parses_and_derives() {
    let resp: UserListResponse = serde_json::from_str(SCENARIO_LIST_JSON).unwrap();

    assert!(resp.success);
    assert_eq!(resp.pagination.total, 1);
    assert_eq!(resp.data.len(), 1);

    let row = &resp.data[0];
    assert_eq!(row.id, "u1");
    // The table renders one row "Jane Doe" with a bill chip of 0 ...
    assert_eq!(row.display_name(), "Jane Doe");
    assert_eq!(row.bill_count, 0);
    // ... and the view dialog shows the empty-bills message.
    assert!(row.active_bills().is_empty());
}

// ── Display-name derivation ─────────────────────────────

#[test]
fn display_name_prefers_split_fields_over_legacy_name() {
    let user = UserRecord {
        first_name: Some("Jane".into()),
        last_name: Some("Doe".into()),
        name: Some("Someone Else".into()),
        ..Default::default()
    };
    assert_eq!(user.display_name(), "Jane Doe");
}

#[test]
fn display_name_skips_blank_parts() {
    let user = UserRecord {
        first_name: Some("".into()),
        last_name: Some("Doe".into()),
        ..Default::default()
    };
    assert_eq!(user.display_name(), "Doe");
}

// ── Bill visibility ─────────────────────────────────────

#[test]
fn inactive_bills_are_hidden_but_keep_their_count() {
    let user = sample_user();
    assert_eq!(user.bills.len(), 2);
    assert_eq!(user.bill_count, 2);

    let visible = user.active_bills();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "b1");
}

#[test]
fn unknown_bill_status_displays_as_pending() {
    let bill = sample_bill("b9", "archived");
    assert_eq!(BillStatus::parse(&bill.status), BillStatus::Pending);
    assert_eq!(BillStatus::parse(&bill.status).label(), "Pending");
}

// ── Detail-view fixtures ────────────────────────────────

#[test]
fn eligibility_request_round_trips_through_backend_json() {
    let request = sample_eligibility_request();
    let json = serde_json::to_string(&request).unwrap();

    // Wire format is camelCase with a Mongo-style id.
    assert!(json.contains("\"hospitalName\""));
    assert!(json.contains("\"fplPercentage\""));
    assert!(json.contains("\"_id\""));

    let parsed: shared_types::EligibilityRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, request);
}
