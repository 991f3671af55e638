use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const TOAST_DISMISS_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Centralized notification sink.
///
/// Pages fire a message after each mutation and never wait on the result;
/// entries dismiss themselves after a few seconds.
///
/// Usage:
/// ```rust,no_run
/// # use leptos::prelude::*;
/// # use frontend::layout::toast_service::ToastService;
/// let toasts = use_context::<ToastService>().unwrap();
/// toasts.success("Menu item added successfully!");
/// ```
#[derive(Clone, Copy)]
pub struct ToastService {
    entries: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        log::debug!("toast: {message}");
        self.entries
            .update(|list| list.push(Toast { id, kind, message }));

        let entries = self.entries;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            entries.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn entries(&self) -> Vec<Toast> {
        self.entries.get()
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the active toast stack in a fixed corner of the viewport
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.entries()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class>{toast.message.clone()}</div>
                    }
                }
            />
        </div>
    }
}
