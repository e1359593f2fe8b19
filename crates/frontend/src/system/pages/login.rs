use crate::layout::global_context::{sub_memo, use_session};
use crate::layout::left::sidebar::PreferencesPanel;
use crate::shared::components::notice_bar::NoticeBar;
use crate::shared::components::ui::Input;
use contracts::shared::session::Action;
use contracts::shared::view_tree::{LoginView, ViewTree};
use contracts::system::auth::LoginRequest;
use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_session();
    let Some(login) = sub_memo(ctx.tree, |t: &ViewTree| t.login()) else {
        return ().into_any();
    };
    let text = move |f: fn(&LoginView) -> String| move || login.with(|l| f(l));

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = LoginRequest::new(username.get_untracked(), password.get_untracked());
        if ctx.dispatch(Action::Login(request)).is_err() {
            password.set(String::new());
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>{text(|l| l.app_title.clone())}</h1>
                <h2>{text(|l| l.title.clone())}</h2>

                <NoticeBar notice=Signal::derive(move || login.with(|l| l.notice.clone())) />

                <form on:submit=on_submit>
                    <Input
                        id="username"
                        label=Signal::derive(text(|l| l.username_label.clone()))
                        value=username
                        on_input=Callback::new(move |v| username.set(v))
                    />
                    <Input
                        id="password"
                        input_type="password"
                        label=Signal::derive(text(|l| l.password_label.clone()))
                        value=password
                        on_input=Callback::new(move |v| password.set(v))
                    />
                    <button type="submit" class="button button--primary">
                        {text(|l| l.submit_label.clone())}
                    </button>
                </form>

                <div class="login-info">
                    <p>{text(|l| l.hint.clone())}</p>
                </div>

                <PreferencesPanel prefs=Signal::derive(move || login.with(|l| l.preferences.clone())) />
            </div>
        </div>
    }
    .into_any()
}
