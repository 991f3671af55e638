use leptos::prelude::*;

/// Labelled single-line form field
#[component]
pub fn Input(
    #[prop(into)] label: String,
    #[prop(into)] id: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    /// HTML input type, "text" unless the field says otherwise
    #[prop(default = "text".to_string(), into)]
    input_type: String,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>
                {label}
            </label>
            <input
                id=id
                class="form__input"
                type=input_type
                value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                required=required
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
