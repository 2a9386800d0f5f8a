//! Line-numbered code display.
//!
//! Highlighting is applied client-side by CSS keyed on the
//! `language-*` class; this component only extracts and lays out the code.

use leptos::prelude::*;

use crate::util::code::extract_code_block;

#[component]
pub fn CodeRenderer(#[prop(into)] content: String) -> impl IntoView {
    extract_code_block(&content).map(|block| {
        let class = format!("language-{}", block.language);
        let lines = block
            .numbered_lines()
            .into_iter()
            .map(|(number, line)| {
                let line = line.to_owned();
                view! {
                    <span class="code-renderer__line">
                        <span class="code-renderer__number">{number}</span>
                        <span class="code-renderer__text">{line}</span>
                    </span>
                }
            })
            .collect::<Vec<_>>();
        view! {
            <div class="code-renderer">
                <span class="code-renderer__language">{block.language.clone()}</span>
                <pre class="code-renderer__pre">
                    <code class=class>{lines}</code>
                </pre>
            </div>
        }
    })
}
