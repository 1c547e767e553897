use dioxus::prelude::*;

use crate::routes::Route;

/// Program logo, as a compact mark or the full mark-plus-wordmark.
///
/// Defaults to 40x40 for the single mark and 102x36 for the full variant,
/// overridable per call site. Wraps a home link unless `disable_link`.
#[component]
pub fn Logo(
    #[props(default)] width: Option<u32>,
    #[props(default)] height: Option<u32>,
    #[props(default = true)] is_single: bool,
    #[props(default = false)] disable_link: bool,
) -> Element {
    let (w, h) = if is_single {
        (width.unwrap_or(40), height.unwrap_or(40))
    } else {
        (width.unwrap_or(102), height.unwrap_or(36))
    };

    let mark = rsx! {
        svg {
            class: "logo-mark",
            view_box: "0 0 40 40",
            height: "{h}",
            width: if is_single { "{w}" } else { "36" },
            role: "img",
            "aria-label": "Hospital Debt Relief logo",
            rect {
                x: "2",
                y: "2",
                width: "36",
                height: "36",
                rx: "9",
                fill: "var(--relief-primary, #0b6e63)",
            }
            path {
                d: "M17 10h6v7h7v6h-7v7h-6v-7h-7v-6h7z",
                fill: "#fff",
            }
        }
    };

    let body = rsx! {
        {mark}
        if !is_single {
            span { class: "logo-wordmark", "Hospital Debt Relief" }
        }
    };

    if disable_link {
        rsx! {
            span { class: "logo", aria_label: "Logo", {body} }
        }
    } else {
        rsx! {
            Link { to: Route::UserList {}, class: "logo", aria_label: "Logo", {body} }
        }
    }
}
