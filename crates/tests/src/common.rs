use shared_types::{Bill, EligibilityRequest, UserRecord};

/// A fully populated applicant record for detail-view tests.
pub fn sample_user() -> UserRecord {
    UserRecord {
        id: "u1".to_string(),
        first_name: Some("Jane".to_string()),
        last_name: Some("Doe".to_string()),
        email: "jane@example.com".to_string(),
        phone: Some("555-0100".to_string()),
        is_verified: true,
        created_at: Some("2026-01-20T21:35:00Z".to_string()),
        eligibility_count: 1,
        bill_count: 2,
        eligibility_requests: vec![sample_eligibility_request()],
        bills: vec![sample_bill("b1", "pending"), sample_bill("b2", "inactive")],
        ..Default::default()
    }
}

pub fn sample_eligibility_request() -> EligibilityRequest {
    EligibilityRequest {
        id: "e1".to_string(),
        hospital_name: "St. Mary Medical Center".to_string(),
        city: "Dayton".to_string(),
        state: "OH".to_string(),
        household_income: 32500.0,
        household_size: 4,
        is_eligible: true,
        eligibility_type: "charity_care".to_string(),
        bill_amount: Some(12345.67),
        fpl_percentage: 245.25,
        estimated_discount: None,
        created_at: Some("2026-02-01T09:00:00Z".to_string()),
    }
}

pub fn sample_bill(id: &str, status: &str) -> Bill {
    Bill {
        id: id.to_string(),
        patient_name: "Jane Doe".to_string(),
        amount: 950.5,
        status: status.to_string(),
        service_date: Some("2025-12-03".to_string()),
        submitted_at: Some("2026-01-05T14:30:00Z".to_string()),
        pdf_url: None,
        supporting_docs: Vec::new(),
    }
}

/// The list payload from the rendering scenario: one verified record on a
/// single page.
pub const SCENARIO_LIST_JSON: &str = r#"{
    "success": true,
    "data": [{"_id": "u1", "firstName": "Jane", "lastName": "Doe", "billCount": 0}],
    "pagination": {"total": 1}
}"#;
