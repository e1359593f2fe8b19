//! Sidebar: page navigation, user card, quick stats, preferences and logout.

use crate::layout::global_context::{sub_memo, use_session};
use crate::shared::components::metric_grid::MetricGrid;
use crate::shared::components::ui::Select;
use crate::shared::icons::{icon, page_icon};
use contracts::shared::i18n::Language;
use contracts::shared::session::Action;
use contracts::shared::style::{FontSize, Theme};
use contracts::shared::view_tree::{AppView, PreferencesView, ViewTree};
use leptos::prelude::*;

/// Theme, language and font-size selectors; shared with the login page
#[component]
pub fn PreferencesPanel(#[prop(into)] prefs: Signal<PreferencesView>) -> impl IntoView {
    let ctx = use_session();

    let on_theme = Callback::new(move |code: String| {
        if let Some(theme) = Theme::from_str(&code) {
            let _ = ctx.dispatch(Action::SetTheme(theme));
        }
    });
    let on_language = Callback::new(move |code: String| {
        if let Some(language) = Language::from_code(&code) {
            let _ = ctx.dispatch(Action::SetLanguage(language));
        }
    });
    let on_font = Callback::new(move |code: String| {
        if let Some(font_size) = FontSize::from_str(&code) {
            let _ = ctx.dispatch(Action::SetFontSize(font_size));
        }
    });

    view! {
        <div class="preferences">
            <h4 class="preferences__title">{move || prefs.with(|p| p.title.clone())}</h4>
            <Select id="pref-theme" select=Signal::derive(move || prefs.with(|p| p.theme.clone())) on_change=on_theme />
            <Select id="pref-language" select=Signal::derive(move || prefs.with(|p| p.language.clone())) on_change=on_language />
            <Select id="pref-font" select=Signal::derive(move || prefs.with(|p| p.font_size.clone())) on_change=on_font />
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_session();
    let Some(app) = sub_memo(ctx.tree, |t: &ViewTree| t.app()) else {
        return ().into_any();
    };
    let field = move |f: fn(&AppView) -> String| move || app.with(|a| f(a));

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__section-title">{field(|a| a.nav_title.clone())}</div>
            {move || {
                app.with(|a| a.nav.clone())
                    .into_iter()
                    .map(|item| {
                        let page = item.page;
                        view! {
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=item.active
                                on:click=move |_| ctx.navigate(page)
                            >
                                <div class="app-sidebar__item-content">
                                    {page_icon(page)}
                                    <span>{item.label}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}

            <div class="user-card">
                <div class="user-card__title">{icon("user")} {field(|a| a.user_card.title.clone())}</div>
                <div class="user-card__name">{field(|a| a.user_card.name.clone())}</div>
                <div class="user-card__role">{field(|a| a.user_card.role.clone())}</div>
                <div class="user-card__email">{field(|a| a.user_card.email.clone())}</div>
            </div>

            <div class="app-sidebar__section-title">{field(|a| a.quick_stats_title.clone())}</div>
            <MetricGrid metrics=Signal::derive(move || app.with(|a| a.quick_stats.clone())) />

            <PreferencesPanel prefs=Signal::derive(move || app.with(|a| a.preferences.clone())) />

            <button class="button button--secondary app-sidebar__logout" on:click=move |_| {
                let _ = ctx.dispatch(Action::Logout);
            }>
                {icon("logout")}
                {field(|a| a.logout_label.clone())}
            </button>
        </div>
    }
    .into_any()
}
