use leptos::prelude::*;

/// Action button; variant and size map onto BEM modifier classes
#[component]
pub fn Button(
    /// "primary" (default), "secondary" or "ghost"
    #[prop(default = "primary".to_string(), into)]
    variant: String,
    /// "md" (default) or "sm"
    #[prop(default = "md".to_string(), into)]
    size: String,
    #[prop(default = "button".to_string(), into)]
    button_type: String,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let mut class = format!("button button--{variant}");
    if size == "sm" {
        class.push_str(" button--small");
    }

    view! {
        <button
            type=button_type
            class=class
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
