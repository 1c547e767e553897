use dioxus::prelude::*;
use shared_types::format::{date_or_na, format_money, format_percent, money_or_na};
use shared_types::{Bill, BillStatus, EligibilityRequest, UserRecord};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Collapsible, CollapsibleContent,
    CollapsibleTrigger, DetailItem, DetailList, DialogActions, DialogContent, DialogDescription,
    DialogRoot, DialogTitle, Input,
};

/// What the record dialog is doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogMode {
    View,
    Edit,
    Create,
}

impl DialogMode {
    fn title(&self) -> &'static str {
        match self {
            DialogMode::View => "View record",
            DialogMode::Edit => "Edit record",
            DialogMode::Create => "Add record",
        }
    }
}

/// Record detail dialog.
///
/// The body only mounts while the dialog is open, so form state is created
/// fresh from the selected record on every open and discarded on close.
/// Dismissal by button or backdrop never touches the record list.
#[component]
pub fn UserDetailDialog(
    open: bool,
    mode: DialogMode,
    user: Option<UserRecord>,
    on_close: EventHandler<()>,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        DialogRoot {
            open: true,
            on_open_change: move |now_open: bool| {
                if !now_open {
                    on_close.call(());
                }
            },
            DialogBody { mode, user, on_close }
        }
    }
}

#[component]
fn DialogBody(mode: DialogMode, user: Option<UserRecord>, on_close: EventHandler<()>) -> Element {
    let initial = user.clone();
    let mut form_name =
        use_signal(|| initial.as_ref().map(|u| u.display_name()).unwrap_or_default());
    let mut form_email =
        use_signal(|| initial.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let mut form_phone = use_signal(|| {
        initial
            .as_ref()
            .and_then(|u| u.phone.clone())
            .unwrap_or_default()
    });

    let read_only = mode == DialogMode::View;

    let handle_save = move |_: MouseEvent| {
        // No update endpoint exists; Save only validates and closes.
        if form_name.read().trim().is_empty() || form_email.read().trim().is_empty() {
            return;
        }
        on_close.call(());
    };

    rsx! {
        DialogTitle { "{mode.title()}" }
        match mode {
            DialogMode::View => rsx! {},
            DialogMode::Edit => rsx! {
                DialogDescription { "Update the record details below." }
            },
            DialogMode::Create => rsx! {
                DialogDescription { "Fill in the details to create a new record." }
            },
        }

        DialogContent {
            div { class: "dialog-form-grid",
                Input {
                    label: "Name",
                    value: form_name(),
                    readonly: read_only,
                    on_input: move |evt: FormEvent| form_name.set(evt.value()),
                }
                Input {
                    label: "Email",
                    input_type: "email",
                    value: form_email(),
                    readonly: read_only,
                    on_input: move |evt: FormEvent| form_email.set(evt.value()),
                }
                Input {
                    label: "Phone",
                    input_type: "tel",
                    value: form_phone(),
                    readonly: read_only,
                    on_input: move |evt: FormEvent| form_phone.set(evt.value()),
                }
            }

            if mode == DialogMode::View {
                if let Some(record) = user.as_ref() {
                    div { class: "dialog-record-meta",
                        Badge {
                            variant: if record.is_verified { BadgeVariant::Primary } else { BadgeVariant::Outline },
                            if record.is_verified { "Verified" } else { "Unverified" }
                        }
                        span { class: "dialog-record-created",
                            "Member since {date_or_na(record.created_at.as_deref())}"
                        }
                    }

                    EligibilitySection { requests: record.eligibility_requests.clone() }
                    BillsSection { bills: record.active_bills().into_iter().cloned().collect::<Vec<_>>() }
                }
            }
        }

        DialogActions {
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| on_close.call(()),
                "Close"
            }
            if mode != DialogMode::View {
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: handle_save,
                    "Save"
                }
            }
        }
    }
}

/// Collapsible list of eligibility requests, one expandable entry each.
#[component]
fn EligibilitySection(requests: Vec<EligibilityRequest>) -> Element {
    rsx! {
        Collapsible {
            CollapsibleTrigger {
                span { class: "dialog-section-title",
                    "Eligibility requests ({requests.len()})"
                }
            }
            CollapsibleContent {
                if requests.is_empty() {
                    p { class: "dialog-section-empty",
                        "No eligibility requests found for this user."
                    }
                } else {
                    for request in requests.iter() {
                        EligibilityEntry { request: request.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn EligibilityEntry(request: EligibilityRequest) -> Element {
    let heading = if request.hospital_name.is_empty() {
        "Eligibility request".to_string()
    } else {
        request.hospital_name.clone()
    };
    let location = format!("{}, {}", request.city, request.state);

    rsx! {
        Collapsible {
            CollapsibleTrigger {
                span { class: "dialog-entry-title", "{heading}" }
                Badge {
                    variant: if request.is_eligible { BadgeVariant::Primary } else { BadgeVariant::Destructive },
                    if request.is_eligible { "Eligible" } else { "Not eligible" }
                }
            }
            CollapsibleContent {
                DetailList {
                    DetailItem { label: "Location", value: location }
                    DetailItem { label: "Household income", value: format_money(request.household_income) }
                    DetailItem { label: "Household size", value: "{request.household_size}" }
                    DetailItem { label: "Eligibility type", value: request.eligibility_type.clone() }
                    DetailItem { label: "FPL percentage", value: format_percent(request.fpl_percentage) }
                    DetailItem { label: "Bill amount", value: money_or_na(request.bill_amount) }
                    DetailItem { label: "Estimated discount", value: money_or_na(request.estimated_discount) }
                    DetailItem { label: "Requested", value: date_or_na(request.created_at.as_deref()) }
                }
            }
        }
    }
}

/// Collapsible list of bills; inactive bills are already filtered out by
/// the caller.
#[component]
fn BillsSection(bills: Vec<Bill>) -> Element {
    rsx! {
        Collapsible {
            CollapsibleTrigger {
                span { class: "dialog-section-title", "Bills ({bills.len()})" }
            }
            CollapsibleContent {
                if bills.is_empty() {
                    p { class: "dialog-section-empty", "No bills found for this user." }
                } else {
                    for bill in bills.iter() {
                        BillEntry { bill: bill.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn BillEntry(bill: Bill) -> Element {
    let status = BillStatus::parse(&bill.status);
    let heading = if bill.patient_name.is_empty() {
        "Bill".to_string()
    } else {
        bill.patient_name.clone()
    };

    rsx! {
        Collapsible {
            CollapsibleTrigger {
                span { class: "dialog-entry-title", "{heading}" }
                Badge { variant: bill_status_badge_variant(status), "{status.label()}" }
            }
            CollapsibleContent {
                DetailList {
                    DetailItem { label: "Amount", value: format_money(bill.amount) }
                    DetailItem { label: "Service date", value: date_or_na(bill.service_date.as_deref()) }
                    DetailItem { label: "Submitted", value: date_or_na(bill.submitted_at.as_deref()) }
                    if let Some(url) = bill.pdf_url.as_ref() {
                        DetailItem { label: "Bill PDF",
                            a { href: "{url}", target: "_blank", rel: "noreferrer", "Open PDF" }
                        }
                    }
                    if !bill.supporting_docs.is_empty() {
                        DetailItem { label: "Supporting documents",
                            div { class: "dialog-doc-links",
                                for doc in bill.supporting_docs.iter() {
                                    a {
                                        href: "{doc.url}",
                                        target: "_blank",
                                        rel: "noreferrer",
                                        "{doc.file_name}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Map a bill status to its badge variant.
fn bill_status_badge_variant(status: BillStatus) -> BadgeVariant {
    match status {
        BillStatus::Approved => BadgeVariant::Primary,
        BillStatus::Rejected => BadgeVariant::Destructive,
        BillStatus::Submitted | BillStatus::Processing => BadgeVariant::Secondary,
        BillStatus::Pending => BadgeVariant::Outline,
    }
}
