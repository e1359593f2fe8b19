use crate::layout::global_context::{sub_memo, use_session};
use crate::shared::components::data_table::TitledDataTable;
use crate::shared::components::metric_grid::MetricGrid;
use crate::shared::components::ui::{Input, Select, Textarea};
use chrono::Utc;
use contracts::shared::session::Action;
use contracts::shared::view_tree::{PageView, SelectView, SupportTabView, ViewTree};
use contracts::system::support::TicketDraft;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn SupportTab() -> impl IntoView {
    let ctx = use_session();
    let Some(tab) = sub_memo(ctx.tree, |t: &ViewTree| {
        t.page()
            .and_then(PageView::as_training)
            .and_then(|v| v.tab.as_support())
    }) else {
        return ().into_any();
    };
    let draft = RwSignal::new(TicketDraft::default());

    let bound = move |pick: fn(&SupportTabView) -> SelectView, value: fn(&TicketDraft) -> String| {
        Signal::derive(move || {
            let mut select = tab.with(|v| pick(v));
            select.value = draft.with(|d| value(d));
            select
        })
    };

    // An accepted ticket clears the form
    let submit = move |_| {
        let ticket = draft.get_untracked();
        let today = Utc::now().date_naive();
        if ctx.dispatch(Action::SubmitTicket { ticket, today }).is_ok() {
            draft.set(TicketDraft::default());
        }
    };

    view! {
        <div class="support-grid">
            <section class="section">
                <h3 class="section__title">{move || tab.with(|v| v.form_title.clone())}</h3>
                <Select
                    id="ticket-issue-type"
                    select=bound(|v| v.issue_type.clone(), |d| d.issue_type.clone())
                    on_change=Callback::new(move |value: String| draft.update(|d| d.issue_type = value))
                />
                <Select
                    id="ticket-priority"
                    select=bound(|v| v.priority.clone(), |d| d.priority.clone())
                    on_change=Callback::new(move |value: String| draft.update(|d| d.priority = value))
                />
                <Input
                    id="ticket-subject"
                    label=Signal::derive(move || tab.with(|v| v.subject_label.clone()))
                    value=Signal::derive(move || draft.with(|d| d.subject.clone()))
                    on_input=Callback::new(move |text: String| draft.update(|d| d.subject = text))
                />
                <Textarea
                    id="ticket-description"
                    label=Signal::derive(move || tab.with(|v| v.description_label.clone()))
                    value=Signal::derive(move || draft.with(|d| d.description.clone()))
                    on_input=Callback::new(move |text: String| draft.update(|d| d.description = text))
                    rows=5
                />
                <Button appearance=ButtonAppearance::Primary on_click=submit>
                    {move || tab.with(|v| v.submit_label.clone())}
                </Button>
            </section>

            <section class="section">
                <h3 class="section__title">{move || tab.with(|v| v.contact_title.clone())}</h3>
                <dl class="contact">
                    {move || {
                        tab.with(|v| v.contact.clone())
                            .into_iter()
                            .map(|line| view! { <dt>{line.label}</dt><dd>{line.value}</dd> })
                            .collect_view()
                    }}
                </dl>
                <h3 class="section__title">{move || tab.with(|v| v.stats_title.clone())}</h3>
                <MetricGrid metrics=Signal::derive(move || tab.with(|v| v.stats.clone())) />
            </section>
        </div>
        <TitledDataTable table=Signal::derive(move || tab.with(|v| v.tickets.clone())) />
    }
    .into_any()
}
