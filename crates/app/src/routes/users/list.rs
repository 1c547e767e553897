use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use shared_types::format::date_or_na;
use shared_types::{
    debounce_ms, BillSlot, FetchGuard, ListQuery, UploadTracker, UserRecord, PAGE_SIZE_OPTIONS,
};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, FormSelect, Input, PageActions, PageHeader,
    PageTitle, SearchBar, Skeleton,
};

use super::detail::{DialogMode, UserDetailDialog};
use super::upload::BillUploadButton;
use crate::api;

/// Applicant list page: server-backed table with debounced search,
/// pagination, per-row PDF uploads, and the record detail dialog.
#[component]
pub fn UserListPage() -> Element {
    // Applied query driving fetches; the raw input box debounces into it.
    let mut query = use_signal(ListQuery::new);
    let mut search_input = use_signal(String::new);
    let mut debounce_task: Signal<Option<Task>> = use_signal(|| None);

    let mut rows: Signal<Vec<UserRecord>> = use_signal(Vec::new);
    let mut total = use_signal(|| 0u64);
    let mut loading = use_signal(|| true);
    let mut error_msg: Signal<Option<String>> = use_signal(|| None);
    let mut reload = use_signal(|| 0u32);
    let mut guard = use_signal(FetchGuard::new);

    let tracker = use_signal(UploadTracker::new);

    let mut dialog_open = use_signal(|| false);
    let mut dialog_mode = use_signal(|| DialogMode::View);
    let mut selected: Signal<Option<UserRecord>> = use_signal(|| None);

    // Debounced search: an empty input applies immediately, anything else
    // waits out the quiet period. A newer keystroke cancels the pending
    // apply, so only the latest input ever reaches the query.
    let handle_search_input = move |evt: FormEvent| {
        let text = evt.value();
        search_input.set(text.clone());

        if let Some(task) = debounce_task.write().take() {
            task.cancel();
        }

        let delay = debounce_ms(&text);
        if delay == 0 {
            query.write().set_search(text);
        } else {
            let task = spawn(async move {
                TimeoutFuture::new(delay).await;
                debounce_task.set(None);
                query.write().set_search(text);
            });
            debounce_task.set(Some(task));
        }
    };

    // Fetch whenever the applied query changes or a reload is requested.
    // Completions from superseded generations are dropped, so a stale
    // response can never overwrite newer state.
    use_effect(move || {
        let q = query.read().clone();
        let _ = *reload.read();
        let generation = guard.write().begin();
        loading.set(true);

        spawn(async move {
            let result = api::list_users(&q).await;
            if !guard.read().is_current(generation) {
                return;
            }
            match result {
                Ok(resp) => {
                    rows.set(resp.data);
                    total.set(resp.pagination.total);
                    error_msg.set(None);
                }
                Err(err) => {
                    // Keep the previous page on screen; only surface the message.
                    error_msg.set(Some(err.friendly_message().to_string()));
                }
            }
            loading.set(false);
        });
    });

    let open_create = move |_: MouseEvent| {
        selected.set(None);
        dialog_mode.set(DialogMode::Create);
        dialog_open.set(true);
    };

    let row_list = rows.read().clone();
    let is_loading = *loading.read();
    let record_total = *total.read();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./users.css") }

        div { class: "users-page",
            PageHeader {
                PageTitle { "Users" }
                PageActions {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: open_create,
                        "Add record"
                    }
                }
            }

            SearchBar {
                Input {
                    value: search_input(),
                    placeholder: "Search by name or email",
                    label: "",
                    on_input: handle_search_input,
                }
            }

            if let Some(message) = error_msg() {
                div { class: "users-alert", role: "alert",
                    span { "{message}" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| reload += 1,
                        "Retry"
                    }
                }
            }

            if is_loading && row_list.is_empty() {
                div { class: "users-loading",
                    Skeleton {}
                    Skeleton {}
                    Skeleton {}
                }
            } else if row_list.is_empty() {
                // Distinct from the loading skeletons and from the error alert;
                // with an error showing, the alert above is the whole story.
                if error_msg.read().is_none() {
                    div { class: "users-empty", "No users found." }
                }
            } else {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Name" }
                        DataTableColumn { "Email" }
                        DataTableColumn { "Phone" }
                        DataTableColumn { "Status" }
                        DataTableColumn { "Joined" }
                        DataTableColumn { "Eligibility" }
                        DataTableColumn { "Bills" }
                        DataTableColumn { "Uploads" }
                        DataTableColumn { "Actions" }
                    }
                    DataTableBody {
                        for user in row_list.iter() {
                            UserRow {
                                key: "{user.id}",
                                user: user.clone(),
                                tracker,
                                on_uploaded: move |_| reload += 1,
                                on_view: move |record: UserRecord| {
                                    selected.set(Some(record));
                                    dialog_mode.set(DialogMode::View);
                                    dialog_open.set(true);
                                },
                                on_edit: move |record: UserRecord| {
                                    selected.set(Some(record));
                                    dialog_mode.set(DialogMode::Edit);
                                    dialog_open.set(true);
                                },
                            }
                        }
                    }
                }

                PaginationControls { query, total: record_total }
            }

            UserDetailDialog {
                open: dialog_open(),
                mode: dialog_mode(),
                user: selected(),
                on_close: move |_| {
                    dialog_open.set(false);
                    selected.set(None);
                },
            }
        }
    }
}

/// One applicant row: identity columns, count chips, the two upload slots,
/// and view/edit actions.
#[component]
fn UserRow(
    user: UserRecord,
    tracker: Signal<UploadTracker>,
    on_uploaded: EventHandler<()>,
    on_view: EventHandler<UserRecord>,
    on_edit: EventHandler<UserRecord>,
) -> Element {
    let display_name = user.display_name();
    let phone = user.phone.clone().unwrap_or_else(|| "--".to_string());
    let joined = date_or_na(user.created_at.as_deref());
    let user_for_view = user.clone();
    let user_for_edit = user.clone();

    rsx! {
        DataTableRow {
            DataTableCell {
                span { class: "user-name", "{display_name}" }
            }
            DataTableCell { "{user.email}" }
            DataTableCell { "{phone}" }
            DataTableCell {
                Badge {
                    variant: if user.is_verified { BadgeVariant::Primary } else { BadgeVariant::Outline },
                    if user.is_verified { "Verified" } else { "Unverified" }
                }
            }
            DataTableCell { "{joined}" }
            DataTableCell {
                Badge { variant: BadgeVariant::Secondary, "{user.eligibility_count}" }
            }
            DataTableCell {
                Badge { variant: BadgeVariant::Secondary, "{user.bill_count}" }
            }
            DataTableCell {
                div { class: "upload-slots",
                    BillUploadButton {
                        user_id: user.id.clone(),
                        slot: BillSlot::BillInfo,
                        tracker,
                        on_uploaded: move |_| on_uploaded.call(()),
                    }
                    BillUploadButton {
                        user_id: user.id.clone(),
                        slot: BillSlot::BillDocument,
                        tracker,
                        on_uploaded: move |_| on_uploaded.call(()),
                    }
                }
            }
            DataTableCell {
                div { class: "row-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_view.call(user_for_view.clone()),
                        "View"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_edit.call(user_for_edit.clone()),
                        "Edit"
                    }
                }
            }
        }
    }
}

/// Previous/Next pagination with a rows-per-page selector.
///
/// Page-size changes go through `ListQuery::set_per_page`, which resets to
/// the first page; plain page moves preserve size and search.
#[component]
fn PaginationControls(query: Signal<ListQuery>, total: u64) -> Element {
    let q = query.read().clone();
    let total_pages = q.total_pages(total);
    let current_page = q.page as u64 + 1;
    let prev_page = q.page.saturating_sub(1);
    let next_page = q.page + 1;
    let per_page = q.per_page;

    rsx! {
        div { class: "pagination",
            FormSelect {
                label: "Rows per page",
                value: "{per_page}",
                onchange: move |evt: Event<FormData>| {
                    if let Ok(size) = evt.value().parse::<u32>() {
                        query.write().set_per_page(size);
                    }
                },
                for size in PAGE_SIZE_OPTIONS.iter() {
                    option { value: "{size}", "{size}" }
                }
            }

            if current_page > 1 {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| query.write().set_page(prev_page),
                    "Previous"
                }
            }
            span { class: "pagination-info",
                "Page {current_page} of {total_pages} ({total} total)"
            }
            if current_page < total_pages {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| query.write().set_page(next_page),
                    "Next"
                }
            }
        }
    }
}
