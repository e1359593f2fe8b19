use crate::layout::global_context::{sub_memo, use_session};
use crate::shared::components::ui::{Checkbox, Select};
use contracts::shared::session::{keys, Action};
use contracts::shared::view_tree::{PageView, ViewTree};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, Spinner};

#[component]
pub fn BackupTab() -> impl IntoView {
    let ctx = use_session();
    let Some(tab) = sub_memo(ctx.tree, |t: &ViewTree| {
        t.page()
            .and_then(PageView::as_admin)
            .and_then(|a| a.tab.as_backup())
    }) else {
        return ().into_any();
    };
    let running = Memo::new(move |_| tab.with(|v| v.running));
    // Components to restore; all selected initially
    let restore_set = RwSignal::new(tab.with_untracked(|v| v.components.clone()));

    let run_backup = move |_| {
        if ctx.state.with_untracked(|s| s.backup_running) {
            return;
        }
        if ctx.dispatch(Action::StartBackup).is_err() {
            return;
        }
        let delay = ctx.backup_delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            let _ = ctx.dispatch(Action::FinishBackup);
        });
    };

    let restore = move |_| {
        log::debug!("restore requested for {:?}", restore_set.get_untracked());
        let _ = ctx.dispatch(Action::RestoreBackup);
    };

    view! {
        <h3 class="section__title">{move || tab.with(|v| v.title.clone())}</h3>
        <p class="backup__last">{move || tab.with(|v| v.last_backup.clone())}</p>
        <div class="filter-row">
            <Select
                id="backup-schedule"
                select=Signal::derive(move || tab.with(|v| v.schedule.clone()))
                on_change=Callback::new(move |value: String| ctx.set_widget(keys::BACKUP_SCHEDULE, value))
            />
            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || running.get())
                on_click=run_backup
            >
                {move || tab.with(|v| v.run_label.clone())}
            </Button>
        </div>
        <Show when=move || running.get()>
            <div class="backup__running">
                <Spinner />
                <span>{move || tab.with(|v| v.running_text.clone())}</span>
            </div>
        </Show>

        <section class="section">
            <h4>{move || tab.with(|v| v.restore_title.clone())}</h4>
            <Select
                id="backup-file"
                select=Signal::derive(move || tab.with(|v| v.file.clone()))
                on_change=Callback::new(move |value: String| ctx.set_widget(keys::BACKUP_FILE, value))
            />
            <div class="form__group">
                <span class="form__label">{move || tab.with(|v| v.components_label.clone())}</span>
                {move || {
                    tab.with(|v| v.components.clone())
                        .into_iter()
                        .map(|component| {
                            let id = format!("restore-{}", component.replace(' ', "-").to_lowercase());
                            let checked_name = component.clone();
                            let toggled_name = component.clone();
                            view! {
                                <Checkbox
                                    id=id
                                    label=component
                                    checked=Signal::derive(move || restore_set.with(|c| c.contains(&checked_name)))
                                    on_change=Callback::new(move |on: bool| {
                                        restore_set.update(|c| {
                                            c.retain(|n| n != &toggled_name);
                                            if on {
                                                c.push(toggled_name.clone());
                                            }
                                        })
                                    })
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>
            <Button appearance=ButtonAppearance::Secondary on_click=restore>
                {move || tab.with(|v| v.restore_label.clone())}
            </Button>
        </section>
    }
    .into_any()
}
