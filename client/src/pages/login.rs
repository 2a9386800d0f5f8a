//! Login page offering Google sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::loading_dots::LoadingDots;
use crate::util::auth::SessionAuth;

/// Human-readable text for an `?error=` code sent back by the OAuth flow.
pub fn login_error_message(code: &str) -> String {
    match code.trim() {
        "" => String::new(),
        "auth_failed" => "Sign-in failed. Please try again.".to_owned(),
        "access_denied" => "Access was denied. Grant access to continue.".to_owned(),
        other => format!("Sign-in failed: {other}"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<SessionAuth>();
    let query = use_query_map();
    let navigate = use_navigate();

    // Already signed in: nothing to do here.
    Effect::new(move || {
        if !auth.loading() && auth.is_authenticated() {
            navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let error = move || {
        query
            .with(|q| q.get("error"))
            .map(|code| login_error_message(&code))
            .filter(|msg| !msg.is_empty())
    };

    view! {
        <Show
            when=move || !auth.loading()
            fallback=|| view! { <div class="guard-placeholder"><LoadingDots/></div> }
        >
            <div class="login-page">
                <div class="login-card">
                    <div class="login-card__logo">"L"</div>
                    <h1>"lyrnios.ai"</h1>
                    <p class="login-card__subtitle">
                        "Your AI-powered learning assistant. Ask anything, learn everything."
                    </p>
                    {move || error().map(|msg| view! { <p class="login-message login-message--error">{msg}</p> })}
                    <div class="login-divider">
                        <span>"Sign in to continue"</span>
                    </div>
                    <button class="login-button" on:click=move |_| auth.login_with_google()>
                        "Continue with Google"
                    </button>
                    <p class="login-card__footer">"By signing in, you agree to our Terms of Service"</p>
                </div>
            </div>
        </Show>
    }
}
