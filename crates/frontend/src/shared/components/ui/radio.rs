use contracts::shared::view_tree::OptionView;
use leptos::prelude::*;

/// Radio group over rendered options
#[component]
pub fn RadioGroup(
    #[prop(into)]
    label: Signal<String>,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// Name attribute shared by the inputs
    #[prop(into)]
    name: String,
    #[prop(into)]
    options: Signal<Vec<OptionView>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <div class="form__radio-group">
                <For
                    each=move || options.get()
                    key=|o| (o.value.clone(), o.label.clone())
                    children=move |o| {
                        let radio_id = format!("{}-{}", name, o.value);
                        let checked_value = o.value.clone();
                        let change_value = o.value.clone();
                        view! {
                            <div class="form__radio-wrapper">
                                <input
                                    id=radio_id.clone()
                                    type="radio"
                                    class="form__radio"
                                    name=name.clone()
                                    value=o.value
                                    prop:checked=move || value.get() == checked_value
                                    on:change=move |_| on_change.run(change_value.clone())
                                />
                                <label class="form__radio-label" for=radio_id>
                                    {o.label}
                                </label>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
