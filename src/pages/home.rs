//! Authenticated landing page showing the current user and a logout button.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::context::use_auth;
use crate::util::auth::install_unauth_redirect;

/// Home page. Redirects to `/login` once auth settles without a user.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    install_unauth_redirect(auth.state(), use_navigate());

    let username = move || auth.user().map(|u| u.username).unwrap_or_default();

    view! {
        <div class="home-page">
            <Show
                when=move || auth.is_authenticated()
                fallback=move || {
                    view! {
                        <p class="home-page__status">
                            {move || if auth.is_loading() { "Checking session..." } else { "Signed out." }}
                        </p>
                    }
                }
            >
                <h1>"Welcome, " {username}</h1>
                <button class="btn home-page__logout" on:click=move |_| auth.logout()>
                    "Log out"
                </button>
            </Show>
        </div>
    }
}
