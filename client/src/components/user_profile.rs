//! Avatar button with a sign-out dropdown.

#[cfg(test)]
#[path = "user_profile_test.rs"]
mod user_profile_test;

use leptos::prelude::*;

use crate::util::auth::SessionAuth;

const PLACEHOLDER_AVATAR: &str = "https://via.placeholder.com/40";

/// Avatar source, falling back to a placeholder image.
pub fn avatar_src(picture: Option<&str>) -> String {
    picture
        .filter(|p| !p.trim().is_empty())
        .unwrap_or(PLACEHOLDER_AVATAR)
        .to_owned()
}

#[component]
pub fn UserProfile() -> impl IntoView {
    let auth = expect_context::<SessionAuth>();
    let open = RwSignal::new(false);

    move || {
        auth.user().map(|user| {
            let src = avatar_src(user.picture.as_deref());
            let name = user.display_name().to_owned();
            let email = user.email.clone();
            let menu_src = src.clone();
            let menu_name = name.clone();
            let title = name.clone();
            view! {
                <div class="user-profile">
                    <button
                        class="user-profile__avatar-button"
                        title=title
                        on:click=move |_| open.update(|o| *o = !*o)
                    >
                        <img class="user-profile__avatar" src=src alt=name/>
                    </button>
                    <Show when=move || open.get()>
                        <div class="user-profile__backdrop" on:click=move |_| open.set(false)></div>
                        <div class="user-profile__menu">
                            <div class="user-profile__identity">
                                <img class="user-profile__avatar user-profile__avatar--large" src=menu_src.clone() alt=menu_name.clone()/>
                                <div>
                                    <p class="user-profile__name">{menu_name.clone()}</p>
                                    <p class="user-profile__email">{email.clone()}</p>
                                </div>
                            </div>
                            <button
                                class="user-profile__sign-out"
                                on:click=move |_| {
                                    open.set(false);
                                    auth.logout();
                                }
                            >
                                "Sign out"
                            </button>
                        </div>
                    </Show>
                </div>
            }
        })
    }
}
