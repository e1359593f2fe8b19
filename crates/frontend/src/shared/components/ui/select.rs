use contracts::shared::view_tree::SelectView;
use leptos::prelude::*;

/// Labelled `<select>` driven by a rendered [`SelectView`]
#[component]
pub fn Select(
    #[prop(into)]
    select: Signal<SelectView>,
    on_change: Callback<String>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let options = move || select.with(|v| v.options.clone());

    view! {
        <div class="form__group">
            <label class="form__label" for=select_id>
                {move || select.with(|v| v.label.clone())}
            </label>
            <select
                id=select_id
                class="form__select"
                disabled=disabled
                prop:value=move || select.with(|v| v.value.clone())
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                // Labels change with the language, so they are part of the key
                <For
                    each=options
                    key=|o| (o.value.clone(), o.label.clone())
                    children=move |o| {
                        let value = o.value.clone();
                        let is_selected = move || select.with(|v| v.value == value);
                        view! {
                            <option value=o.value selected=is_selected>
                                {o.label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
