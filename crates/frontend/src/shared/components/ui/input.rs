use leptos::prelude::*;

/// Input component with label support
#[component]
pub fn Input(
    #[prop(into)]
    label: Signal<String>,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// "text" (default), "password", "email", "number", "date"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Marks the field as failing validation
    #[prop(optional, into)]
    invalid: Signal<bool>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            <label class="form__label" for=input_id>
                {label}
            </label>
            <input
                id=input_id
                class="form__input"
                class:form__input--invalid=move || invalid.get()
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
