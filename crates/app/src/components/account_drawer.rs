use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdSettings, LdUser};
use dioxus_free_icons::Icon;
use shared_ui::{
    use_toast, Avatar, AvatarFallback, AvatarImage, Button, ButtonVariant, Separator, Sheet,
    SheetClose, SheetContent, SheetFooter, SheetSide, ToastOptions,
};

use crate::auth::use_auth;
use crate::routes::Route;
use crate::session;

/// Account drawer: avatar button in the navbar that opens a right-hand
/// sheet with the operator's identity, account shortcuts, and sign-out.
#[component]
pub fn AccountDrawer() -> Element {
    let mut auth = use_auth();
    let toast = use_toast();
    let mut open = use_signal(|| false);

    let user = auth.current_user.read().clone();
    let display_name = user
        .as_ref()
        .map(|u| u.display_label())
        .unwrap_or_else(|| "User".to_string());
    let email = user.as_ref().map(|u| u.email.clone()).unwrap_or_default();
    let avatar_src = user.as_ref().and_then(|u| u.photo_url.clone());
    let initial = display_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    let avatar_src_large = avatar_src.clone();
    let initial_large = initial.clone();

    let handle_sign_out = move |_: MouseEvent| {
        session::clear_token();
        auth.clear_auth();
        open.set(false);
        toast.success("Signed out".to_string(), ToastOptions::new());
        navigator().push(Route::Login {});
    };

    rsx! {
        button {
            class: "account-button",
            "aria-label": "Open account drawer",
            onclick: move |_| open.set(true),
            Avatar {
                if let Some(src) = avatar_src.clone() {
                    AvatarImage { src: src }
                }
                AvatarFallback { "{initial}" }
            }
        }

        Sheet {
            open: open(),
            on_close: move |_| open.set(false),
            side: SheetSide::Right,

            SheetClose { on_close: move |_| open.set(false) }

            SheetContent {
                div { class: "account-drawer-identity",
                    div { class: "account-drawer-avatar",
                        Avatar {
                            if let Some(src) = avatar_src_large {
                                AvatarImage { src: src }
                            }
                            AvatarFallback { "{initial_large}" }
                        }
                    }
                    span { class: "account-drawer-name", "{display_name}" }
                    if !email.is_empty() {
                        span { class: "account-drawer-email", "{email}" }
                    }
                }

                Separator {}

                div { class: "account-drawer-menu",
                    button {
                        class: "account-drawer-item",
                        onclick: move |_| open.set(false),
                        Icon::<LdUser> { icon: LdUser, width: 18, height: 18 }
                        span { "Profile" }
                    }
                    button {
                        class: "account-drawer-item",
                        onclick: move |_| open.set(false),
                        Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 }
                        span { "Account settings" }
                    }
                }
            }

            SheetFooter {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: handle_sign_out,
                    "Sign out"
                }
            }
        }
    }
}
