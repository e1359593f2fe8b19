use contracts::shared::session::NoticeKind;
use contracts::shared::view_tree::NoticeView;
use leptos::prelude::*;
use thaw::{MessageBar, MessageBarBody, MessageBarIntent};

fn intent(kind: NoticeKind) -> MessageBarIntent {
    match kind {
        NoticeKind::Success => MessageBarIntent::Success,
        NoticeKind::Info => MessageBarIntent::Info,
        NoticeKind::Warning => MessageBarIntent::Warning,
        NoticeKind::Error => MessageBarIntent::Error,
    }
}

/// The session's one-shot notice, if any
#[component]
pub fn NoticeBar(#[prop(into)] notice: Signal<Option<NoticeView>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            view! {
                <div class="notice-bar">
                    <MessageBar intent=intent(n.kind)>
                        <MessageBarBody>{n.text}</MessageBarBody>
                    </MessageBar>
                </div>
            }
        })
    }
}
