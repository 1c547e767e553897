use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Input};

use crate::auth::use_auth;
use crate::routes::Route;
use crate::{api, session};

/// Sign-in page with an email/password form.
///
/// On success the access token goes into session storage and the operator
/// lands on the users page. Failures surface inline and leave the form
/// editable.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in; nothing to do here.
    if auth.is_authenticated() {
        navigator().push(Route::UserList {});
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);

        match api::sign_in(email(), password()).await {
            Ok(resp) => {
                session::store_token(&resp.access_token);
                auth.set_user(resp.user);
                navigator().push(Route::UserList {});
            }
            Err(err) => {
                error_msg.set(Some(err.friendly_message().to_string()));
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    div { class: "auth-card-logo",
                        crate::components::Logo { is_single: false, disable_link: true }
                    }
                    CardTitle { "Sign in" }
                    CardDescription { "Enter your credentials to access the admin portal" }
                }

                CardContent {
                    form {
                        onsubmit: handle_login,

                        div { class: "auth-form",
                            Input {
                                label: "Email",
                                input_type: "email",
                                value: email(),
                                placeholder: "you@example.com",
                                on_input: move |evt: FormEvent| email.set(evt.value()),
                            }

                            Input {
                                label: "Password",
                                input_type: "password",
                                value: password(),
                                on_input: move |evt: FormEvent| password.set(evt.value()),
                            }

                            if let Some(msg) = error_msg() {
                                div { class: "auth-error", role: "alert", "{msg}" }
                            }

                            Button {
                                variant: ButtonVariant::Primary,
                                disabled: loading(),
                                if loading() { "Signing in..." } else { "Sign in" }
                            }
                        }
                    }
                }
            }
        }
    }
}
