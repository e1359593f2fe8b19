//! Application shell: login gate and the logged-in layout.

use crate::dashboards::d400_overview::ui::DashboardPage;
use crate::dashboards::d401_reports::ui::ReportsPage;
use crate::domain::a001_record::ui::details::AddRecordPage;
use crate::domain::a001_record::ui::list::RecordsPage;
use crate::layout::global_context::use_session;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::admin::ui::AdminPage;
use crate::system::pages::login::LoginPage;
use crate::system::training::ui::TrainingPage;
use contracts::shared::navigation::Page;
use leptos::prelude::*;

/// Content area for the current page; remounts only when the page changes.
#[component]
fn PageSwitch() -> impl IntoView {
    let ctx = use_session();
    let page = Memo::new(move |_| ctx.tree.with(|t| t.page().map(|p| p.page())));

    move || match page.get() {
        Some(Page::Dashboard) => view! { <DashboardPage /> }.into_any(),
        Some(Page::Records) => view! { <RecordsPage /> }.into_any(),
        Some(Page::AddRecord) => view! { <AddRecordPage /> }.into_any(),
        Some(Page::Reports) => view! { <ReportsPage /> }.into_any(),
        Some(Page::Admin) => view! { <AdminPage /> }.into_any(),
        Some(Page::Training) => view! { <TrainingPage /> }.into_any(),
        None => ().into_any(),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <PageSwitch /> }.into_any()
        />
    }
}

/// Shows `LoginPage` while logged out and `MainLayout` otherwise
#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = use_session();
    let logged_in = ctx.is_logged_in();

    view! {
        <Show
            when=move || logged_in.get()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
