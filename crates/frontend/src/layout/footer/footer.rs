use crate::layout::global_context::use_session;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_session();
    let lines = Memo::new(move |_| {
        ctx.tree
            .with(|t| t.app().map(|a| a.footer.clone()))
            .unwrap_or_default()
    });

    view! {
        <footer data-zone="footer" class="status-bar">
            {move || {
                lines
                    .get()
                    .into_iter()
                    .map(|line| view! { <div class="status-bar__line">{line}</div> })
                    .collect_view()
            }}
        </footer>
    }
}
