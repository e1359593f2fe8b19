//! Training center: user guide, modules, quick reference, FAQ and support.

mod faq_tab;
mod guide_tab;
mod modules_tab;
mod support_tab;

use crate::layout::global_context::{sub_memo, use_session};
use crate::shared::components::data_table::TitledDataTable;
use crate::shared::components::tab_strip::TabStrip;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::shared::session::keys;
use contracts::shared::view_tree::{PageView, TrainingTabView, ViewTree};
use faq_tab::FaqTab;
use guide_tab::GuideTab;
use leptos::prelude::*;
use modules_tab::ModulesTab;
use support_tab::SupportTab;

#[derive(Clone, Copy, PartialEq)]
enum TabKind {
    Guide,
    Modules,
    QuickReference,
    Faq,
    Support,
}

impl TabKind {
    fn of(tab: &TrainingTabView) -> Self {
        match tab {
            TrainingTabView::Guide(_) => TabKind::Guide,
            TrainingTabView::Modules(_) => TabKind::Modules,
            TrainingTabView::QuickReference(_) => TabKind::QuickReference,
            TrainingTabView::Faq(_) => TabKind::Faq,
            TrainingTabView::Support(_) => TabKind::Support,
        }
    }
}

#[component]
pub fn TrainingPage() -> impl IntoView {
    let ctx = use_session();
    let Some(page) = sub_memo(ctx.tree, |t: &ViewTree| t.page().and_then(PageView::as_training)) else {
        return ().into_any();
    };
    let kind = Memo::new(move |_| page.with(|v| TabKind::of(&v.tab)));

    view! {
        <PageFrame page_id="sys_training--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title=Signal::derive(move || page.with(|v| v.title.clone())) />
            <div class="page__content">
                <TabStrip
                    tabs=Signal::derive(move || page.with(|v| v.tabs.clone()))
                    selected=Signal::derive(move || page.with(|v| v.selected_tab.clone()))
                    on_select=Callback::new(move |code: String| ctx.set_widget(keys::TRAINING_TAB, code))
                />
                <div class="tab-panel">
                    {move || match kind.get() {
                        TabKind::Guide => view! { <GuideTab /> }.into_any(),
                        TabKind::Modules => view! { <ModulesTab /> }.into_any(),
                        TabKind::QuickReference => view! { <QuickReferenceTab /> }.into_any(),
                        TabKind::Faq => view! { <FaqTab /> }.into_any(),
                        TabKind::Support => view! { <SupportTab /> }.into_any(),
                    }}
                </div>
            </div>
        </PageFrame>
    }
    .into_any()
}

#[component]
fn QuickReferenceTab() -> impl IntoView {
    let ctx = use_session();
    let Some(tables) = sub_memo(ctx.tree, |t: &ViewTree| {
        t.page()
            .and_then(PageView::as_training)
            .and_then(|v| v.tab.as_quick_reference())
    }) else {
        return ().into_any();
    };

    view! {
        <div class="quick-reference">
            {move || {
                tables
                    .get()
                    .into_iter()
                    .map(|table| view! { <TitledDataTable table=Signal::stored(table) /> })
                    .collect_view()
            }}
        </div>
    }
    .into_any()
}
