use crate::layout::global_context::use_session;
use crate::shared::components::notice_bar::NoticeBar;
use leptos::prelude::*;

/// Content zone: the session notice above the current page
#[component]
pub fn Center(children: Children) -> impl IntoView {
    let ctx = use_session();
    let notice = Signal::derive(move || ctx.tree.with(|t| t.app().and_then(|a| a.notice.clone())));

    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            <NoticeBar notice=notice />
            {children()}
        </div>
    }
}
