use chrono::{NaiveDate, Utc};
use contracts::domain::a001_record::aggregate::{Category, Priority};
use contracts::domain::a001_record::form::{InitialStatus, RecordForm, SubmitAction, Visibility};
use contracts::shared::session::Action;
use crate::layout::global_context::SessionContext;
use leptos::prelude::*;

/// ViewModel for the add-record form
#[derive(Clone, Copy)]
pub struct RecordFormViewModel {
    pub form: RwSignal<RecordForm>,
    ctx: SessionContext,
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

impl RecordFormViewModel {
    pub fn new(ctx: SessionContext) -> Self {
        Self {
            form: RwSignal::new(RecordForm::blank(today())),
            ctx,
        }
    }

    pub fn set_category(&self, code: &str) {
        self.form.update(|f| f.category = Category::from_str(code));
    }

    pub fn set_priority(&self, code: &str) {
        if let Some(priority) = Priority::from_str(code) {
            self.form.update(|f| f.priority = priority);
        }
    }

    pub fn set_status(&self, code: &str) {
        if let Some(status) = InitialStatus::from_code(code) {
            self.form.update(|f| f.status = status);
        }
    }

    /// Invalid dates typed by hand are ignored
    pub fn set_start_date(&self, value: &str) {
        if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            self.form.update(|f| f.start_date = date);
        }
    }

    pub fn set_end_date(&self, value: &str) {
        if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            self.form.update(|f| f.end_date = date);
        }
    }

    pub fn set_visibility(&self, code: &str) {
        self.form.update(|f| {
            f.visibility = match code {
                "restricted" => Visibility::Restricted { users: Vec::new() },
                "private" => Visibility::Private,
                _ => Visibility::Public,
            }
        });
    }

    /// Toggle one user in the restricted-visibility list
    pub fn toggle_user(&self, user: &str, checked: bool) {
        self.form.update(|f| {
            if let Visibility::Restricted { users } = &mut f.visibility {
                users.retain(|u| u != user);
                if checked {
                    users.push(user.to_string());
                }
            }
        });
    }

    pub fn is_user_assigned(&self, user: &str) -> bool {
        self.form.with(|f| match &f.visibility {
            Visibility::Restricted { users } => users.iter().any(|u| u == user),
            _ => false,
        })
    }

    /// Submit the form; a successful submission that stays on the page clears it
    pub fn submit_command(&self, action: SubmitAction) {
        let form = self.form.get_untracked();
        let accepted = self
            .ctx
            .dispatch(Action::SubmitRecord { form, action })
            .is_ok();
        if accepted && matches!(action, SubmitAction::SaveAndContinue | SubmitAction::SaveAsDraft) {
            self.form.set(RecordForm::blank(today()));
        }
    }
}
