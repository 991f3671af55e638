use super::state::AdminFormState;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use contracts::enums::{DietaryTag, ItemState, MenuCategory};
use leptos::prelude::*;

fn category_options() -> Vec<(String, String)> {
    MenuCategory::all()
        .into_iter()
        .map(|c| (c.code().to_string(), c.display_name().to_string()))
        .collect()
}

fn dietary_options() -> Vec<(String, String)> {
    DietaryTag::all()
        .into_iter()
        .map(|d| (d.code().to_string(), d.display_name().to_string()))
        .collect()
}

fn state_options() -> Vec<(String, String)> {
    ItemState::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect()
}

/// Add/edit form of the admin panel
#[component]
pub fn MenuItemForm(
    /// Raw form values
    form: RwSignal<AdminFormState>,
    /// Whether an existing item is being edited
    #[prop(into)]
    editing: Signal<bool>,
    /// Submit handler (validation happens in the page)
    on_submit: Callback<()>,
    /// Cancel handler
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="admin-form">
            <h2 class="admin-form__title">
                {move || if editing.get() { "Edit Menu Item" } else { "Add New Menu Item" }}
            </h2>
            <form
                class="admin-form__body"
                on:submit=move |ev| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                <Input
                    label="Name"
                    id="item-name"
                    required=true
                    placeholder="e.g. Masala Chai".to_string()
                    value=Signal::derive(move || form.get().name)
                    on_input=Callback::new(move |value| form.update(|f| f.name = value))
                />

                <div class="admin-form__row">
                    <Select
                        label="Category"
                        id="item-category"
                        value=Signal::derive(move || form.get().category)
                        options=Signal::derive(category_options)
                        on_change=Callback::new(move |value| form.update(|f| f.category = value))
                    />
                    <Select
                        label="Dietary"
                        id="item-dietary"
                        value=Signal::derive(move || form.get().dietary)
                        options=Signal::derive(dietary_options)
                        on_change=Callback::new(move |value| form.update(|f| f.dietary = value))
                    />
                </div>

                <div class="admin-form__row">
                    <Input
                        label="Price (₹)"
                        id="item-price"
                        input_type="number"
                        required=true
                        value=Signal::derive(move || form.get().price)
                        on_input=Callback::new(move |value| form.update(|f| f.price = value))
                    />
                    <Select
                        label="Status"
                        id="item-state"
                        value=Signal::derive(move || form.get().state)
                        options=Signal::derive(state_options)
                        on_change=Callback::new(move |value| form.update(|f| f.state = value))
                    />
                </div>

                <Textarea
                    label="Description".to_string()
                    id="item-description".to_string()
                    rows=3
                    placeholder="Optional description shown on the menu card".to_string()
                    value=Signal::derive(move || form.get().description)
                    on_input=Callback::new(move |value| form.update(|f| f.description = value))
                />

                <div class="admin-form__actions">
                    <Button button_type="submit">
                        {move || if editing.get() { "Update Item" } else { "Add Item" }}
                    </Button>
                    <Button
                        variant="secondary"
                        on_click=Callback::new(move |_| on_cancel.run(()))
                    >
                        "Cancel"
                    </Button>
                </div>
            </form>
        </div>
    }
}
