use leptos::prelude::*;

/// Labelled dropdown bound to a string code.
///
/// Options are `(code, display text)` pairs; the admin form feeds these
/// straight from the enum catalogs and stores the selected code back.
#[component]
pub fn Select(
    #[prop(into)] label: String,
    #[prop(into)] id: String,
    /// Code of the currently selected option
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>
                {label}
            </label>
            <select
                id=id
                class="form__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <For
                    each=move || options.get()
                    key=|(code, _)| code.clone()
                    children=move |(code, text)| {
                        let this = code.clone();
                        view! {
                            <option value=code selected=move || value.get() == this>
                                {text}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
