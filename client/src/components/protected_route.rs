//! Route guard for authenticated views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps protected route views in `App`. The decision is recomputed from
//! `AuthState` on every change, so a logout anywhere bounces the user to
//! `/login` from whichever protected page is mounted.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading_dots::LoadingDots;
use crate::state::auth::GuardDecision;
use crate::util::auth::SessionAuth;

/// Mounts `children` only for an authenticated user.
///
/// While auth is loading a placeholder is shown and children stay unmounted.
/// Once resolved without a user, navigates to `/login`, replacing the history
/// entry so "back" does not loop through the guard.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<SessionAuth>();
    let navigate = use_navigate();
    let decision = Memo::new(move |_| auth.decision());

    Effect::new(move || {
        if decision.get() == GuardDecision::Denied {
            navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        GuardDecision::Pending => view! {
            <div class="guard-placeholder">
                <LoadingDots/>
            </div>
        }
        .into_any(),
        GuardDecision::Denied => ().into_any(),
        GuardDecision::Allowed => children().into_any(),
    }
}
