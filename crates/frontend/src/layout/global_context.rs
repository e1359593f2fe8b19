use contracts::shared::config::AppConfig;
use contracts::shared::navigation::Page;
use contracts::shared::sample_data::reference_data;
use contracts::shared::session::{Action, ActionError, SessionState};
use contracts::shared::view_tree::{render, ViewTree};
use contracts::system::auth::CredentialTable;
use leptos::prelude::*;
use serde_json::Value;

/// Session state, its rendered tree and the credential table.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: RwSignal<SessionState>,
    pub tree: Memo<ViewTree>,
    credentials: StoredValue<CredentialTable>,
    pub backup_delay_ms: u32,
    pub left_open: RwSignal<bool>,
}

impl SessionContext {
    pub fn new(config: &AppConfig) -> Self {
        let state = RwSignal::new(SessionState::start(config));
        let tree = Memo::new(move |_| state.with(|s| render(s, reference_data())));
        Self {
            state,
            tree,
            credentials: StoredValue::new(config.credential_table()),
            backup_delay_ms: config.session.backup_delay_ms,
            left_open: RwSignal::new(true),
        }
    }

    /// Apply one action to the session. Rejections are already reflected
    /// in the session notice; the result lets forms decide whether to reset.
    pub fn dispatch(&self, action: Action) -> Result<(), ActionError> {
        let state = self.state;
        let result = self
            .credentials
            .try_with_value(|creds| state.try_update(|s| s.apply(action, creds)))
            .flatten();
        match result {
            Some(Err(e)) => {
                log::debug!("action rejected: {e}");
                Err(e)
            }
            _ => Ok(()),
        }
    }

    pub fn navigate(&self, page: Page) {
        let _ = self.dispatch(Action::Navigate(page));
    }

    /// Store a widget value (selected tab, dropdown choice, search text)
    pub fn set_widget(&self, key: &str, value: impl Into<String>) {
        let _ = self.dispatch(Action::SetWidget {
            key: key.to_string(),
            value: Value::String(value.into()),
        });
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn is_logged_in(&self) -> Memo<bool> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.is_logged_in()))
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext context not found")
}

/// Narrow a memo to one variant of its value.
///
/// Returns `None` when the variant is absent at mount time. Afterwards the
/// last seen value is kept while the source shows another variant, so a
/// component being torn down never observes a missing view.
pub fn sub_memo<S, T, F>(source: Memo<S>, pick: F) -> Option<Memo<T>>
where
    S: PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(&S) -> Option<&T> + Copy + Send + Sync + 'static,
{
    let initial = source.with_untracked(|s| pick(s).cloned())?;
    Some(Memo::new(move |prev: Option<&T>| {
        source
            .with(|s| pick(s).cloned())
            .or_else(|| prev.cloned())
            .unwrap_or_else(|| initial.clone())
    }))
}
