//! Chat thread for one session: history, prompt box, and assistant replies.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by the session page. On the load path it reads the stored thread;
//! on the fresh path it immediately sends the query that opened the session.
//! Each exchange is persisted after the reply arrives so the user message and
//! the answer land in order.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::components::code_renderer::CodeRenderer;
use crate::components::loading_dots::LoadingDots;
use crate::net::api::ApiEndpoint;
use crate::net::types::MessageRole;
use crate::state::chat::{AssistantReply, ChatState, ThreadMessage, normalize_prompt};
use crate::util::auth::SessionAuth;

#[component]
pub fn Chat(
    #[prop(into)] session_id: String,
    #[prop(into)] initial_query: String,
    endpoint: RwSignal<ApiEndpoint>,
    load_existing: bool,
    on_error: Callback<String>,
) -> impl IntoView {
    let auth = expect_context::<SessionAuth>();
    let chat = RwSignal::new(ChatState::default());
    let input = RwSignal::new(String::new());
    let session_id = StoredValue::new(session_id);
    let initial_query = StoredValue::new(initial_query);

    let send = move |raw: String| {
        let Some(prompt) = normalize_prompt(&raw) else {
            return;
        };
        if chat.with_untracked(|c| c.pending) {
            return;
        }
        chat.update(|c| c.push_user(&prompt));

        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::NewMessage;

            let client = auth.client().get_untracked();
            let session_id = session_id.get_value();
            let endpoint = endpoint.get_untracked();
            leptos::task::spawn_local(async move {
                match client.generate(endpoint, &prompt).await {
                    Ok(payload) => {
                        chat.update(|c| c.push_assistant(payload.clone()));
                        for message in [NewMessage::user(&prompt), NewMessage::assistant(payload)] {
                            if let Err(e) = client.add_message(&session_id, &message).await {
                                log::error!("failed to save message to session {session_id}: {e}");
                            }
                        }
                    }
                    Err(e) => {
                        log::error!("generation via {} failed: {e}", endpoint.path());
                        chat.update(|c| c.push_error(format!("Sorry, something went wrong: {e}")));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, session_id, endpoint, prompt);
        }
    };

    let started = StoredValue::new(false);
    Effect::new(move || {
        if started.get_value() {
            return;
        }
        started.set_value(true);

        if load_existing {
            #[cfg(feature = "hydrate")]
            {
                let client = auth.client().get_untracked();
                let id = session_id.get_value();
                leptos::task::spawn_local(async move {
                    match client.get_session(&id).await {
                        Ok(detail) => chat.set(ChatState::from_detail(detail)),
                        Err(e) => {
                            log::error!("failed to load session {id}: {e}");
                            on_error.run(format!("Could not load this conversation ({e})."));
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = on_error;
            }
        } else {
            send(initial_query.get_value());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = input.get_untracked();
        if normalize_prompt(&text).is_some() && !chat.with_untracked(|c| c.pending) {
            input.set(String::new());
            send(text);
        }
    };

    view! {
        <div class="chat">
            <div class="chat__messages">
                {move || {
                    chat.with(|c| c.messages.iter().map(render_message).collect::<Vec<_>>())
                }}
                <Show when=move || chat.with(|c| c.pending)>
                    <div class="chat__pending">
                        <LoadingDots compact=true/>
                    </div>
                </Show>
            </div>
            <form class="chat__input-row" on:submit=on_submit>
                <input
                    class="chat__input"
                    type="text"
                    placeholder="Ask a follow-up..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button
                    class="btn btn--primary chat__send"
                    type="submit"
                    disabled=move || chat.with(|c| c.pending) || normalize_prompt(&input.get()).is_none()
                >
                    "Send"
                </button>
            </form>
        </div>
    }
}

fn render_message(message: &ThreadMessage) -> AnyView {
    if message.role == MessageRole::User {
        let text = message.content.clone().unwrap_or_default();
        return view! {
            <div class="chat__message chat__message--user">
                <p>{text}</p>
            </div>
        }
        .into_any();
    }

    let reply = AssistantReply::from_message(message);
    let is_error = message.is_error;
    view! {
        <div class="chat__message chat__message--assistant" class:chat__message--error=is_error>
            {reply.text.map(|text| {
                let rendered = render_markdown_html(&text);
                view! { <div class="chat__markdown" inner_html=rendered></div> }
            })}
            {reply.code.map(|code| view! { <CodeRenderer content=code/> })}
            {reply.diagram.map(|diagram| view! { <pre class="mermaid chat__diagram">{diagram}</pre> })}
            {reply.raw.map(|raw| view! { <pre class="chat__raw">{raw}</pre> })}
        </div>
    }
    .into_any()
}

fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Model output is untrusted: drop raw HTML before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
