use dioxus::prelude::*;

/// Centered modal dialog.
///
/// Renders nothing while closed. Clicking the backdrop calls
/// `on_open_change(false)`, same as an explicit close control, so callers
/// treat both dismissal paths identically.
#[component]
pub fn DialogRoot(
    open: bool,
    on_open_change: EventHandler<bool>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "relief-dialog-overlay",
            onclick: move |_| on_open_change.call(false),
            div {
                class: "relief-dialog-panel",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Scrollable body of a dialog.
#[component]
pub fn DialogContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "relief-dialog-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Dialog heading.
#[component]
pub fn DialogTitle(children: Element) -> Element {
    rsx! {
        h2 { class: "relief-dialog-title", {children} }
    }
}

/// Supporting text under the title.
#[component]
pub fn DialogDescription(children: Element) -> Element {
    rsx! {
        p { class: "relief-dialog-description", {children} }
    }
}

/// Right-aligned action row at the bottom of a dialog.
#[component]
pub fn DialogActions(children: Element) -> Element {
    rsx! {
        div { class: "relief-dialog-actions", {children} }
    }
}
