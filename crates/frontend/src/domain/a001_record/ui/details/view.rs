use super::view_model::RecordFormViewModel;
use crate::layout::global_context::{sub_memo, use_session};
use crate::shared::components::ui::{Checkbox, Input, RadioGroup, Select, Textarea};
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_record::form::{RecordForm, SubmitAction};
use contracts::shared::view_tree::{AddRecordView, PageView, SelectView, ViewTree};
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, Button, ButtonAppearance, Flex, FlexGap};

#[component]
pub fn AddRecordPage() -> impl IntoView {
    let ctx = use_session();
    let Some(page) = sub_memo(ctx.tree, |t: &ViewTree| t.page().and_then(PageView::as_add_record)) else {
        return ().into_any();
    };
    let vm = RecordFormViewModel::new(ctx);
    let form = vm.form;

    let has_error = move |field: &'static str| {
        Signal::derive(move || page.with(|v| v.field_errors.iter().any(|e| e.field == field)))
    };
    // Rendered selects with the form's current value in place of the default
    let bound = move |pick: fn(&AddRecordView) -> SelectView, value: fn(&RecordForm) -> String| {
        Signal::derive(move || {
            let mut select = page.with(|v| pick(v));
            select.value = form.with(|f| value(f));
            select
        })
    };
    let label = move |f: fn(&AddRecordView) -> String| {
        Signal::derive(move || page.with(|v| f(v)))
    };
    let placeholder = move |f: fn(&AddRecordView) -> String| {
        Signal::derive(move || page.with(|v| Some(f(v))))
    };

    view! {
        <PageFrame page_id="a001_record--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title=label(|v| v.title.clone()) />
            <div class="page__content details-form">
                <p class="page__subtitle">{move || page.with(|v| v.subtitle.clone())}</p>

                <section class="section">
                    <h3 class="section__title">{move || page.with(|v| v.basic_title.clone())}</h3>
                    <Input
                        id="record-title"
                        label=label(|v| v.title_field.label.clone())
                        placeholder=placeholder(|v| v.title_field.placeholder.clone())
                        value=Signal::derive(move || form.with(|f| f.title.clone()))
                        invalid=has_error("title")
                        on_input=Callback::new(move |text: String| form.update(|f| f.title = text))
                    />
                    <div class="form__group">
                        <span class="form__label">{move || page.with(|v| v.record_id_label.clone())}</span>
                        <code class="form__readonly">{move || page.with(|v| v.next_id.clone())}</code>
                    </div>
                    <Select
                        id="record-category"
                        select=bound(|v| v.category.clone(), |f| f.category.map(|c| c.as_str().to_string()).unwrap_or_default())
                        on_change=Callback::new(move |code: String| vm.set_category(&code))
                    />
                    <Select
                        id="record-priority"
                        select=bound(|v| v.priority.clone(), |f| f.priority.as_str().to_string())
                        on_change=Callback::new(move |code: String| vm.set_priority(&code))
                    />
                    <Textarea
                        id="record-description"
                        label=label(|v| v.description_label.clone())
                        value=Signal::derive(move || form.with(|f| f.description.clone()))
                        on_input=Callback::new(move |text: String| form.update(|f| f.description = text))
                        rows=4
                    />
                    <Flex gap=FlexGap::Medium>
                        <Input
                            id="record-start"
                            input_type="date"
                            label=label(|v| v.start_label.clone())
                            value=Signal::derive(move || form.with(|f| f.start_date.format("%Y-%m-%d").to_string()))
                            on_input=Callback::new(move |text: String| vm.set_start_date(&text))
                        />
                        <Input
                            id="record-end"
                            input_type="date"
                            label=label(|v| v.end_label.clone())
                            value=Signal::derive(move || form.with(|f| f.end_date.format("%Y-%m-%d").to_string()))
                            on_input=Callback::new(move |text: String| vm.set_end_date(&text))
                        />
                    </Flex>
                    <Input
                        id="record-tags"
                        label=label(|v| v.tags.label.clone())
                        placeholder=placeholder(|v| v.tags.placeholder.clone())
                        value=Signal::derive(move || form.with(|f| f.tags.clone()))
                        on_input=Callback::new(move |text: String| form.update(|f| f.tags = text))
                    />
                    <Flex gap=FlexGap::Small>
                        {move || {
                            form.with(|f| f.tag_list())
                                .into_iter()
                                .map(|tag| view! { <Badge appearance=BadgeAppearance::Outline>{tag}</Badge> })
                                .collect_view()
                        }}
                    </Flex>
                </section>

                <section class="section">
                    <h3 class="section__title">{move || page.with(|v| v.access_title.clone())}</h3>
                    <RadioGroup
                        name="record-visibility"
                        label=label(|v| v.visibility_label.clone())
                        options=Signal::derive(move || page.with(|v| v.visibility.clone()))
                        value=Signal::derive(move || form.with(|f| f.visibility.code().to_string()))
                        on_change=Callback::new(move |code: String| vm.set_visibility(&code))
                    />
                    <Show when=move || form.with(|f| f.visibility.code() == "restricted")>
                        <div class="form__group">
                            <span class="form__label">{move || page.with(|v| v.assign_label.clone())}</span>
                            {move || {
                                page.with(|v| v.assignable_users.clone())
                                    .into_iter()
                                    .map(|user| {
                                        let id = format!("assign-{}", user.replace(' ', "-").to_lowercase());
                                        let checked_user = user.clone();
                                        let toggled_user = user.clone();
                                        view! {
                                            <Checkbox
                                                id=id
                                                label=user
                                                checked=Signal::derive(move || vm.is_user_assigned(&checked_user))
                                                on_change=Callback::new(move |on: bool| vm.toggle_user(&toggled_user, on))
                                            />
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                    <Select
                        id="record-status"
                        select=bound(|v| v.status.clone(), |f| f.status.code().to_string())
                        on_change=Callback::new(move |code: String| vm.set_status(&code))
                    />
                    <Select
                        id="record-department"
                        select=bound(|v| v.department.clone(), |f| f.department.clone())
                        on_change=Callback::new(move |dept: String| form.update(|f| f.department = dept))
                    />
                </section>

                {move || {
                    page.with(|v| v.field_errors.clone())
                        .into_iter()
                        .map(|e| view! { <div class="form__error" data-field=e.field>{e.text}</div> })
                        .collect_view()
                }}

                <div class="details-actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.submit_command(SubmitAction::Save)>
                        {move || page.with(|v| v.save_label.clone())}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.submit_command(SubmitAction::SaveAndContinue)>
                        {move || page.with(|v| v.save_continue_label.clone())}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.submit_command(SubmitAction::SaveAsDraft)>
                        {move || page.with(|v| v.draft_label.clone())}
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| vm.submit_command(SubmitAction::Cancel)>
                        {move || page.with(|v| v.cancel_label.clone())}
                    </Button>
                </div>
            </div>
        </PageFrame>
    }
    .into_any()
}
