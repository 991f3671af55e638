pub mod global_context;
pub mod header;
pub mod toast_service;

use crate::layout::header::header::Header;
use crate::layout::toast_service::ToastHost;
use leptos::prelude::*;

/// Application frame: top navigation, main content region, toast stack
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="shell">
            <Header />
            // Re-runs when the active page changes
            <main class="shell__main">
                {move || center()}
            </main>
            <ToastHost />
        </div>
    }
}
