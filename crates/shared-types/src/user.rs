use serde::{Deserialize, Serialize};

/// An applicant record as returned by the admin users endpoint.
///
/// The backend stores Mongo-style documents: ids arrive under `_id`, field
/// names are camelCase, and older records may carry a single combined `name`
/// instead of split first/last fields. Everything defaults so that partial
/// documents still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Legacy combined name field still present on older records.
    pub name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub is_verified: bool,
    pub created_at: Option<String>,
    /// Denormalized counts maintained by the backend.
    pub eligibility_count: i64,
    pub bill_count: i64,
    pub eligibility_requests: Vec<EligibilityRequest>,
    pub bills: Vec<Bill>,
}

impl UserRecord {
    /// Display name: non-empty first/last joined with a space, else the
    /// legacy `name` field, else a placeholder.
    pub fn display_name(&self) -> String {
        let joined = [&self.first_name, &self.last_name]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !joined.is_empty() {
            return joined;
        }
        if let Some(name) = self.name.as_deref() {
            if !name.trim().is_empty() {
                return name.trim().to_string();
            }
        }
        "Unnamed user".to_string()
    }

    /// Bills shown in the detail view. Bills marked inactive stay in
    /// `bill_count` but are never displayed.
    pub fn active_bills(&self) -> Vec<&Bill> {
        self.bills.iter().filter(|b| !b.is_inactive()).collect()
    }
}

/// A displayed-only eligibility request attached to an applicant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EligibilityRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub hospital_name: String,
    pub city: String,
    pub state: String,
    pub household_income: f64,
    pub household_size: u32,
    pub is_eligible: bool,
    pub eligibility_type: String,
    pub bill_amount: Option<f64>,
    /// Federal-poverty-line percentage, precomputed by the backend.
    pub fpl_percentage: f64,
    pub estimated_discount: Option<f64>,
    pub created_at: Option<String>,
}

/// A hospital bill attached to an applicant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bill {
    #[serde(rename = "_id")]
    pub id: String,
    pub patient_name: String,
    pub amount: f64,
    /// Raw status string; parse with [`BillStatus::parse`] for display.
    pub status: String,
    pub service_date: Option<String>,
    pub submitted_at: Option<String>,
    pub pdf_url: Option<String>,
    pub supporting_docs: Vec<SupportingDoc>,
}

impl Bill {
    /// Inactive bills are hidden from the detail view entirely.
    pub fn is_inactive(&self) -> bool {
        self.status.eq_ignore_ascii_case("inactive")
    }
}

/// A supporting document reference on a bill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupportingDoc {
    pub url: String,
    pub file_name: String,
}

/// Closed set of displayable bill statuses. Anything unrecognized is
/// treated as pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillStatus {
    #[default]
    Pending,
    Submitted,
    Processing,
    Approved,
    Rejected,
}

impl BillStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "submitted" => BillStatus::Submitted,
            "processing" => BillStatus::Processing,
            "approved" => BillStatus::Approved,
            "rejected" => BillStatus::Rejected,
            _ => BillStatus::Pending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Pending => "Pending",
            BillStatus::Submitted => "Submitted",
            BillStatus::Processing => "Processing",
            BillStatus::Approved => "Approved",
            BillStatus::Rejected => "Rejected",
        }
    }
}

/// The authenticated operator, as returned by the `me` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub display_name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}

impl AuthUser {
    /// Name fallback chain used by the account drawer.
    pub fn display_label(&self) -> String {
        for candidate in [&self.name, &self.display_name] {
            if let Some(value) = candidate.as_deref() {
                if !value.trim().is_empty() {
                    return value.trim().to_string();
                }
            }
        }
        if !self.email.trim().is_empty() {
            return self.email.clone();
        }
        "User".to_string()
    }
}
