pub mod login;
pub mod users;

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{AccountDrawer, Logo};
use crate::{api, session};
use shared_ui::Navbar;

use login::Login;
use users::list::UserListPage;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    UserList {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout: resolves the operator behind the stored token and
/// redirects to sign-in when there is nothing to resolve.
///
/// A 401 during the `me` call clears the token inside the HTTP wrapper, so
/// the guard only has to route the failure to the sign-in page.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();

    // Resolves to Ok(None) when no token is stored; a token invalidated by
    // the backend comes back as Err after the wrapper evicts it.
    let resource = use_resource(move || async move {
        if session::access_token().is_none() {
            return Ok(None);
        }
        api::fetch_me().await.map(Some)
    });
    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(Some(user))) => {
            if !auth.is_authenticated() {
                auth.set_user(user);
            }
            rsx! { Outlet::<Route> {} }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            auth.clear_auth();
            navigator().push(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to sign-in..." }
                }
            }
        }
        None => {
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}

/// Main app layout: top navbar with the logo, page title, and account drawer.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();

    let page_title = match &route {
        Route::UserList {} => "Users",
        Route::Login {} => "Sign in",
        Route::NotFound { .. } => "Not found",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        Navbar {
            Logo { is_single: true, width: 32, height: 32 }
            span { class: "navbar-title", "{page_title}" }
            div { class: "navbar-spacer" }
            AccountDrawer {}
        }

        div {
            class: "page-content",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn UserList() -> Element {
    UserListPage()
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        div { class: "not-found",
            h1 { "Page not found" }
            p { "No page exists at /{path}." }
            Link { to: Route::UserList {}, "Back to users" }
        }
    }
}
