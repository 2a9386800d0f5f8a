//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::config::ClientConfig;
use crate::pages::{
    auth_callback::AuthCallbackPage, home::HomePage, login::LoginPage, session::SessionPage,
};
use crate::util::auth::SessionAuth;
use crate::util::token_store::{LocalTokenStore, TokenStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the client config and the auth handle, then boots auth from the
/// persisted token. The bootstrap effect only runs in the browser, so the
/// server always renders the loading state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let store: Arc<dyn TokenStore> = Arc::new(LocalTokenStore::new(&config.token_storage_key));
    let auth = SessionAuth::new(config.clone(), store);

    provide_context(config);
    provide_context(auth);

    Effect::new(move || auth.bootstrap());

    view! {
        <Stylesheet id="leptos" href="/pkg/lyrn.css"/>
        <Title text="lyrnios.ai"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("callback")) view=AuthCallbackPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <ProtectedRoute><HomePage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("session"), ParamSegment("id"))
                    view=|| view! { <ProtectedRoute><SessionPage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}
