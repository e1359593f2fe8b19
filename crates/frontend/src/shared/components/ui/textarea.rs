use leptos::prelude::*;

/// Textarea component with label support
#[component]
pub fn Textarea(
    #[prop(into)]
    label: Signal<String>,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)]
    rows: Option<u32>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <label class="form__label" for=textarea_id>
                {label}
            </label>
            <textarea
                id=textarea_id
                class="form__textarea"
                rows=rows.unwrap_or(3)
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
