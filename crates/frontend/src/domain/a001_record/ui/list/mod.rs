use crate::layout::global_context::{sub_memo, use_session};
use crate::shared::components::data_table::DataTable;
use crate::shared::components::ui::{Input, Select};
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_record::aggregate::{Category, RecordStatus};
use contracts::domain::a001_record::filter::{RecordField, RecordFilter};
use contracts::shared::list_utils::Choice;
use contracts::shared::navigation::Page;
use contracts::shared::session::{keys, Action};
use contracts::shared::view_tree::{PageView, ViewTree};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Flex, FlexGap};

#[component]
pub fn RecordsPage() -> impl IntoView {
    let ctx = use_session();
    let Some(page) = sub_memo(ctx.tree, |t: &ViewTree| t.page().and_then(PageView::as_records)) else {
        return ().into_any();
    };

    // Filter edits start from the session's current filter
    let update_filter = move |edit: &dyn Fn(&mut RecordFilter)| {
        let mut filter = ctx.state.with_untracked(|s| s.record_view.filter.clone());
        edit(&mut filter);
        let _ = ctx.dispatch(Action::SetRecordFilter(filter));
    };

    let on_search = Callback::new(move |text: String| {
        update_filter(&|f: &mut RecordFilter| f.search = text.clone());
    });
    let on_category = Callback::new(move |code: String| {
        update_filter(&|f: &mut RecordFilter| f.category = Choice::parse_with(&code, Category::from_str));
    });
    let on_status = Callback::new(move |code: String| {
        update_filter(&|f: &mut RecordFilter| f.status = Choice::parse_with(&code, RecordStatus::from_str));
    });
    let on_sort = Callback::new(move |code: String| {
        if let Some(field) = RecordField::from_code(&code) {
            let _ = ctx.dispatch(Action::SortRecords(field));
        }
    });

    let quick_actions = Memo::new(move |_| page.with(|v| v.quick_actions.clone()));

    view! {
        <PageFrame page_id="a001_record--list" category=PAGE_CAT_LIST>
            <PageHeader title=Signal::derive(move || page.with(|v| v.title.clone()))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| ctx.navigate(Page::AddRecord)>
                    {move || page.with(|v| v.add_label.clone())}
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-row">
                    <Input
                        id="records-search"
                        label=Signal::derive(move || page.with(|v| v.search.label.clone()))
                        value=Signal::derive(move || page.with(|v| v.search.value.clone()))
                        placeholder=Signal::derive(move || page.with(|v| Some(v.search.placeholder.clone())))
                        on_input=on_search
                    />
                    <Select
                        id="records-category"
                        select=Signal::derive(move || page.with(|v| v.category.clone()))
                        on_change=on_category
                    />
                    <Select
                        id="records-status"
                        select=Signal::derive(move || page.with(|v| v.status.clone()))
                        on_change=on_status
                    />
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| log::debug!("records refreshed")>
                        {move || page.with(|v| v.refresh_label.clone())}
                    </Button>
                </div>

                <Flex gap=FlexGap::Small>
                    {move || {
                        page.with(|v| v.toolbar.clone())
                            .into_iter()
                            .map(|label| view! {
                                <Button appearance=ButtonAppearance::Subtle>{label}</Button>
                            })
                            .collect_view()
                    }}
                </Flex>

                <section class="section">
                    <h3 class="section__title">{move || page.with(|v| v.table_title.clone())}</h3>
                    <div class="section__meta">{move || page.with(|v| v.match_count.clone())}</div>
                    {move || page.with(|v| v.empty_text.clone()).map(|text| view! {
                        <div class="empty-state">{text}</div>
                    })}
                    <DataTable table=Signal::derive(move || page.with(|v| v.table.clone())) on_sort=on_sort />
                </section>

                <Show when=move || quick_actions.with(|q| q.is_some())>
                    <section class="section quick-actions">
                        <h3 class="section__title">
                            {move || quick_actions.with(|q| q.as_ref().map(|q| q.title.clone()))}
                        </h3>
                        <Select
                            id="records-quick-select"
                            select=Signal::derive(move || {
                                quick_actions.with(|q| q.as_ref().map(|q| q.select.clone()).unwrap_or_default())
                            })
                            on_change=Callback::new(move |id: String| ctx.set_widget(keys::SELECTED_RECORD, id))
                        />
                        // Record actions are not wired to any operation
                        <Flex gap=FlexGap::Small>
                            {move || {
                                quick_actions
                                    .with(|q| q.as_ref().map(|q| q.buttons.clone()).unwrap_or_default())
                                    .into_iter()
                                    .map(|label| view! {
                                        <Button appearance=ButtonAppearance::Secondary>{label}</Button>
                                    })
                                    .collect_view()
                            }}
                        </Flex>
                    </section>
                </Show>
            </div>
        </PageFrame>
    }
    .into_any()
}
