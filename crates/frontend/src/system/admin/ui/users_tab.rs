use crate::layout::global_context::{sub_memo, use_session};
use crate::shared::components::data_table::DataTable;
use crate::shared::components::ui::Select;
use contracts::shared::list_utils::Choice;
use contracts::shared::session::Action;
use contracts::shared::view_tree::{PageView, ViewTree};
use contracts::system::users::{Role, UserFilter, UserStatus};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Flex, FlexGap};

#[component]
pub fn UsersTab() -> impl IntoView {
    let ctx = use_session();
    let Some(tab) = sub_memo(ctx.tree, |t: &ViewTree| {
        t.page()
            .and_then(PageView::as_admin)
            .and_then(|a| a.tab.as_users())
    }) else {
        return ().into_any();
    };

    let update_filter = move |edit: &dyn Fn(&mut UserFilter)| {
        let mut filter = ctx.state.with_untracked(|s| s.user_filter.clone());
        edit(&mut filter);
        let _ = ctx.dispatch(Action::SetUserFilter(filter));
    };

    view! {
        <h3 class="section__title">{move || tab.with(|v| v.title.clone())}</h3>
        <div class="filter-row">
            <Select
                id="user-role"
                select=Signal::derive(move || tab.with(|v| v.role.clone()))
                on_change=Callback::new(move |code: String| {
                    update_filter(&|f: &mut UserFilter| f.role = Choice::parse_with(&code, Role::from_str));
                })
            />
            <Select
                id="user-department"
                select=Signal::derive(move || tab.with(|v| v.department.clone()))
                on_change=Callback::new(move |code: String| {
                    update_filter(&|f: &mut UserFilter| {
                        f.department = Choice::parse_with(&code, |d| Some(d.to_string()))
                    });
                })
            />
            <Select
                id="user-status"
                select=Signal::derive(move || tab.with(|v| v.status.clone()))
                on_change=Callback::new(move |code: String| {
                    update_filter(&|f: &mut UserFilter| f.status = Choice::parse_with(&code, UserStatus::from_str));
                })
            />
        </div>
        <DataTable table=Signal::derive(move || tab.with(|v| v.table.clone())) />
        <Flex gap=FlexGap::Small>
            {move || {
                tab.with(|v| v.actions.clone())
                    .into_iter()
                    .map(|label| view! { <Button appearance=ButtonAppearance::Secondary>{label}</Button> })
                    .collect_view()
            }}
        </Flex>
    }
    .into_any()
}
