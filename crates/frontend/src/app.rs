use crate::domain::menu_item::store::MenuStore;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::toast_service::ToastService;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Navigation state for the whole app
    provide_context(AppGlobalContext::new());

    // Session-scoped menu repository, seeded with the demo dataset.
    // Constructed at session start and discarded on reload.
    provide_context(MenuStore::new());

    // Notification sink for create/update/delete feedback
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
    }
}
