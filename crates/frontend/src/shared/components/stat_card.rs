use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dashboard counter card: label, icon and a reactive integer value
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Counter value
    #[prop(into)]
    value: Signal<usize>,
    /// Accent modifier: "success", "warning" or none
    #[prop(optional, into)]
    accent: MaybeProp<String>,
) -> impl IntoView {
    let accent_class = move || match accent.get().as_deref() {
        Some("success") => "stat-card__value--success",
        Some("warning") => "stat-card__value--warning",
        _ => "",
    };

    view! {
        <div class="stat-card">
            <div class="stat-card-header">
                <span class="stat-card__label">{label}</span>
                {icon(&icon_name)}
            </div>
            <div class=move || format!("stat-card__value {}", accent_class())>
                {move || value.get()}
            </div>
        </div>
    }
}
