//! Administration page: users, system settings, security log and backups.

mod backup_tab;
mod security_tab;
mod settings_tab;
mod users_tab;

use crate::layout::global_context::{sub_memo, use_session};
use crate::shared::components::tab_strip::TabStrip;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use backup_tab::BackupTab;
use contracts::shared::session::keys;
use contracts::shared::view_tree::{AdminTabView, PageView, ViewTree};
use leptos::prelude::*;
use security_tab::SecurityTab;
use settings_tab::SettingsTab;
use users_tab::UsersTab;

#[derive(Clone, Copy, PartialEq)]
enum TabKind {
    Users,
    Settings,
    Security,
    Backup,
}

impl TabKind {
    fn of(tab: &AdminTabView) -> Self {
        match tab {
            AdminTabView::Users(_) => TabKind::Users,
            AdminTabView::Settings(_) => TabKind::Settings,
            AdminTabView::Security(_) => TabKind::Security,
            AdminTabView::Backup(_) => TabKind::Backup,
        }
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let ctx = use_session();
    let Some(page) = sub_memo(ctx.tree, |t: &ViewTree| t.page().and_then(PageView::as_admin)) else {
        return ().into_any();
    };
    let kind = Memo::new(move |_| page.with(|v| TabKind::of(&v.tab)));

    view! {
        <PageFrame page_id="sys_admin--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title=Signal::derive(move || page.with(|v| v.title.clone())) />
            <div class="page__content">
                <TabStrip
                    tabs=Signal::derive(move || page.with(|v| v.tabs.clone()))
                    selected=Signal::derive(move || page.with(|v| v.selected_tab.clone()))
                    on_select=Callback::new(move |code: String| ctx.set_widget(keys::ADMIN_TAB, code))
                />
                <div class="tab-panel">
                    {move || match kind.get() {
                        TabKind::Users => view! { <UsersTab /> }.into_any(),
                        TabKind::Settings => view! { <SettingsTab /> }.into_any(),
                        TabKind::Security => view! { <SecurityTab /> }.into_any(),
                        TabKind::Backup => view! { <BackupTab /> }.into_any(),
                    }}
                </div>
            </div>
        </PageFrame>
    }
    .into_any()
}
