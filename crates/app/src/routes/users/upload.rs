use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use shared_types::{validate_pdf, BillSlot, SlotPhase, UploadTracker, SUCCESS_BADGE_MS};
use shared_ui::{use_toast, Badge, BadgeVariant, ToastOptions};

use crate::api;

/// File-picker button for one upload slot on one applicant row.
///
/// Selecting a file validates it (type, then size) before any network
/// activity, uploads on pass, and reflects the slot phase inline: a
/// disabled "Uploading..." state, a transient success badge, or an error
/// message. The input element is keyed by the slot epoch so every terminal
/// transition remounts it and the same file can be re-selected.
#[component]
pub fn BillUploadButton(
    user_id: String,
    slot: BillSlot,
    tracker: Signal<UploadTracker>,
    on_uploaded: EventHandler<()>,
) -> Element {
    let toast = use_toast();

    let phase = tracker.read().phase(&user_id, slot);
    let epoch = tracker.read().epoch(&user_id, slot);
    let uploading = phase == SlotPhase::Uploading;

    let uid = user_id.clone();
    let handle_file = move |evt: FormEvent| {
        let user_id = uid.clone();
        let mut tracker = tracker;
        async move {
            let files = evt.files();
            let Some(file) = files.first() else {
                // Nothing selected; leave the slot untouched.
                return;
            };

            let name = file.name();
            let content_type = file.content_type().unwrap_or_default();

            let bytes = match file.read_bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(_) => {
                    tracker.write().fail(&user_id, slot, "Failed to read file.");
                    return;
                }
            };

            if let Err(message) = validate_pdf(&content_type, bytes.len() as u64) {
                tracker.write().fail(&user_id, slot, message);
                return;
            }

            let began = tracker.write().begin(&user_id, slot);
            if began.is_none() {
                // An upload is already in flight on this slot.
                return;
            }

            match api::upload_user_bill(&user_id, slot, &name, &bytes).await {
                Ok(_) => {
                    let success_epoch = tracker.write().succeed(&user_id, slot);
                    toast.success(format!("{} uploaded", slot.label()), ToastOptions::new());
                    on_uploaded.call(());

                    let user_for_expiry = user_id.clone();
                    spawn(async move {
                        TimeoutFuture::new(SUCCESS_BADGE_MS).await;
                        tracker
                            .write()
                            .expire(&user_for_expiry, slot, success_epoch);
                    });
                }
                Err(err) => {
                    tracker
                        .write()
                        .fail(&user_id, slot, err.friendly_message());
                }
            }
        }
    };

    rsx! {
        div { class: "upload-slot",
            label {
                class: if uploading { "upload-slot-button uploading" } else { "upload-slot-button" },
                input {
                    key: "{epoch}",
                    r#type: "file",
                    class: "upload-slot-input",
                    accept: "application/pdf",
                    disabled: uploading,
                    onchange: handle_file,
                }
                if uploading {
                    "Uploading..."
                } else {
                    "{slot.label()}"
                }
            }

            match phase {
                SlotPhase::Success => rsx! {
                    Badge { variant: BadgeVariant::Primary, "Uploaded" }
                },
                SlotPhase::Error(message) => rsx! {
                    span { class: "upload-slot-error", role: "alert", "{message}" }
                },
                _ => rsx! {},
            }
        }
    }
}
