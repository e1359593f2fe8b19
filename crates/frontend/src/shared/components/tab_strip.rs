use contracts::shared::view_tree::TabView;
use leptos::prelude::*;
use thaw::{Tab, TabList};

/// thaw `TabList` whose selection lives in the session widget store.
///
/// The local signal mirrors `selected`; a click is reported through
/// `on_select` and comes back through the rendered tree.
#[component]
pub fn TabStrip(
    #[prop(into)]
    tabs: Signal<Vec<TabView>>,
    #[prop(into)]
    selected: Signal<String>,
    on_select: Callback<String>,
) -> impl IntoView {
    let selected_value = RwSignal::new(selected.get_untracked());

    Effect::new(move |_| {
        let current = selected.get();
        if selected_value.get_untracked() != current {
            selected_value.set(current);
        }
    });
    Effect::new(move |_| {
        let clicked = selected_value.get();
        if clicked != selected.get_untracked() {
            on_select.run(clicked);
        }
    });

    view! {
        <TabList selected_value=selected_value>
            <For
                each=move || tabs.get()
                key=|t| (t.value.clone(), t.label.clone())
                children=move |t| view! { <Tab value=t.value>{t.label}</Tab> }
            />
        </TabList>
    }
}
