//! Theme and font-size application.
//!
//! The session owns the preference; the rendered tree carries the resolved
//! [`StyleBundle`]. This module only pushes it onto `<body>` as CSS custom
//! properties plus `data-theme` / `data-font-size` hooks for the stylesheet.

use crate::layout::global_context::use_session;
use contracts::shared::style::StyleBundle;
use leptos::prelude::*;
use web_sys::window;

/// Apply a style bundle to the document body.
fn apply_style(style: &StyleBundle) {
    let body = match window().and_then(|w| w.document()).and_then(|d| d.body()) {
        Some(b) => b,
        None => return,
    };

    let _ = body.set_attribute("data-theme", style.theme.as_str());
    let _ = body.set_attribute("data-font-size", style.font_size.as_str());

    let declaration = body.style();
    for (name, value) in style.css_vars() {
        let _ = declaration.set_property(name, &value);
    }
}

/// Keeps the body style in sync with the session's theme and font size.
#[component]
pub fn StyleProvider(children: Children) -> impl IntoView {
    let ctx = use_session();
    let style = Memo::new(move |_| ctx.tree.with(|t| t.style.clone()));

    Effect::new(move |_| {
        let current = style.get();
        log::debug!(
            "applying theme {} / font {}",
            current.theme.as_str(),
            current.font_size.as_str()
        );
        apply_style(&current);
    });

    children()
}
