use crate::layout::global_context::{sub_memo, use_session};
use crate::shared::components::ui::{Checkbox, Input, Select};
use contracts::shared::session::Action;
use contracts::shared::view_tree::{OptionView, PageView, SelectView, SettingsTabView, ViewTree};
use contracts::system::settings::SystemSettings;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

type Text = fn(&SystemSettings) -> String;
type SetText = fn(&mut SystemSettings, String);
type Number = fn(&SystemSettings) -> u32;
type SetNumber = fn(&mut SystemSettings, u32);

/// Editable copy of the system settings; the session copy changes only on save
#[component]
pub fn SettingsTab() -> impl IntoView {
    let ctx = use_session();
    let Some(tab) = sub_memo(ctx.tree, |t: &ViewTree| {
        t.page()
            .and_then(PageView::as_admin)
            .and_then(|a| a.tab.as_settings())
    }) else {
        return ().into_any();
    };
    let draft = RwSignal::new(tab.with_untracked(|v| v.settings.clone()));

    let label = move |f: fn(&SettingsTabView) -> String| Signal::derive(move || tab.with(|v| f(v)));

    let text_field = move |id: &'static str, caption: fn(&SettingsTabView) -> String, get: Text, set: SetText| {
        view! {
            <Input
                id=id
                label=label(caption)
                value=Signal::derive(move || draft.with(|s| get(s)))
                on_input=Callback::new(move |text: String| draft.update(|s| set(s, text)))
            />
        }
    };
    // Unparsable input leaves the previous value in place
    let number_field = move |id: &'static str, caption: fn(&SettingsTabView) -> String, get: Number, set: SetNumber| {
        view! {
            <Input
                id=id
                input_type="number"
                label=label(caption)
                value=Signal::derive(move || draft.with(|s| get(s).to_string()))
                on_input=Callback::new(move |text: String| {
                    if let Ok(n) = text.trim().parse::<u32>() {
                        draft.update(|s| set(s, n));
                    }
                })
            />
        }
    };
    let choice_field = move |id: &'static str,
                             caption: fn(&SettingsTabView) -> String,
                             choices: fn(&SettingsTabView) -> Vec<String>,
                             get: Text,
                             set: SetText| {
        let select = Signal::derive(move || {
            let (label, options) = tab.with(|v| (caption(v), choices(v)));
            SelectView {
                label,
                value: draft.with(|s| get(s)),
                options: options.iter().map(|o| OptionView::plain(o.as_str())).collect(),
            }
        });
        view! {
            <Select
                id=id
                select=select
                on_change=Callback::new(move |value: String| draft.update(|s| set(s, value)))
            />
        }
    };

    let save = move |_| {
        let settings = draft.get_untracked();
        let _ = ctx.dispatch(Action::SaveSettings(settings));
    };

    view! {
        <h3 class="section__title">{move || tab.with(|v| v.title.clone())}</h3>
        <div class="settings-grid">
            <section class="section">
                <h4>{move || tab.with(|v| v.general_title.clone())}</h4>
                {text_field("company-name", |v| v.labels.company_name.clone(), |s| s.company_name.clone(), |s, x| s.company_name = x)}
                {text_field("system-name", |v| v.labels.system_name.clone(), |s| s.system_name.clone(), |s, x| s.system_name = x)}
                {choice_field("time-zone", |v| v.labels.time_zone.clone(), |v| v.time_zones.clone(), |s| s.time_zone.clone(), |s, x| s.time_zone = x)}
                {choice_field("default-language", |v| v.labels.default_language.clone(), |v| v.languages.clone(), |s| s.default_language.clone(), |s, x| s.default_language = x)}
            </section>
            <section class="section">
                <h4>{move || tab.with(|v| v.email_title.clone())}</h4>
                {text_field("smtp-server", |v| v.labels.smtp_server.clone(), |s| s.smtp_server.clone(), |s, x| s.smtp_server = x)}
                {number_field("smtp-port", |v| v.labels.smtp_port.clone(), |s| s.smtp_port, |s, n| s.smtp_port = n)}
                {text_field("email-from", |v| v.labels.email_from.clone(), |s| s.email_from.clone(), |s, x| s.email_from = x)}
            </section>
            <section class="section">
                <h4>{move || tab.with(|v| v.security_title.clone())}</h4>
                {number_field("session-timeout", |v| v.labels.session_timeout.clone(), |s| s.session_timeout_minutes, |s, n| s.session_timeout_minutes = n)}
                {choice_field("password-policy", |v| v.labels.password_policy.clone(), |v| v.password_policies.clone(), |s| s.password_policy.clone(), |s, x| s.password_policy = x)}
                <Checkbox
                    id="two-factor"
                    label=label(|v| v.labels.two_factor.clone())
                    checked=Signal::derive(move || draft.with(|s| s.two_factor))
                    on_change=Callback::new(move |on: bool| draft.update(|s| s.two_factor = on))
                />
                {number_field("max-login-attempts", |v| v.labels.max_login_attempts.clone(), |s| s.max_login_attempts, |s, n| s.max_login_attempts = n)}
            </section>
            <section class="section">
                <h4>{move || tab.with(|v| v.data_title.clone())}</h4>
                {choice_field("backup-frequency", |v| v.labels.backup_frequency.clone(), |v| v.backup_frequencies.clone(), |s| s.backup_frequency.clone(), |s, x| s.backup_frequency = x)}
                {number_field("retention-days", |v| v.labels.retention_days.clone(), |s| s.retention_days, |s, n| s.retention_days = n)}
                <Checkbox
                    id="auto-archive"
                    label=label(|v| v.labels.auto_archive.clone())
                    checked=Signal::derive(move || draft.with(|s| s.auto_archive))
                    on_change=Callback::new(move |on: bool| draft.update(|s| s.auto_archive = on))
                />
            </section>
        </div>
        <Button appearance=ButtonAppearance::Primary on_click=save>
            {move || tab.with(|v| v.save_label.clone())}
        </Button>
    }
    .into_any()
}
