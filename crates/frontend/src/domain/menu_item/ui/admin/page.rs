use super::form::MenuItemForm;
use super::state::{create_form_state, AdminFormState};
use crate::domain::menu_item::store::use_menu_store;
use crate::domain::menu_item::ui::card::{category_badge_variant, dietary_badge_variant};
use crate::layout::toast_service::ToastService;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::icons::icon;
use contracts::domain::menu_item::{MenuItem, MenuItemId, MenuItemPatch};
use contracts::enums::ItemState;
use leptos::prelude::*;

/// Admin panel: dashboard counters, add/edit form, item table
#[component]
pub fn AdminPanel() -> impl IntoView {
    let store = use_menu_store();
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");

    let form = create_form_state();
    let (editing_item, set_editing_item) = signal(Option::<MenuItemId>::None);
    let (is_form_open, set_is_form_open) = signal(false);

    let open_blank_form = move |_| {
        form.set(AdminFormState::default());
        set_editing_item.set(None);
        set_is_form_open.set(true);
    };

    let close_form = move || {
        form.set(AdminFormState::default());
        set_editing_item.set(None);
        set_is_form_open.set(false);
    };

    let on_submit = move || {
        let input = match form.get_untracked().to_input() {
            Ok(input) => input,
            Err(message) => {
                toasts.error(message);
                return;
            }
        };

        let result = match editing_item.get_untracked() {
            Some(id) => store
                .update(id, MenuItemPatch::from_input(input))
                .map(|_| "Menu item updated successfully!"),
            None => store.create(input).map(|_| "Menu item added successfully!"),
        };

        match result {
            Ok(message) => {
                toasts.success(message);
                close_form();
            }
            Err(err) => toasts.error(err.to_string()),
        }
    };

    let on_edit = move |item: &MenuItem| {
        form.set(AdminFormState::from_item(item));
        set_editing_item.set(Some(item.id));
        set_is_form_open.set(true);
    };

    let on_delete = move |id: MenuItemId| match store.delete(id) {
        Ok(_) => toasts.success("Menu item deleted successfully!"),
        Err(err) => toasts.error(err.to_string()),
    };

    let on_set_state = move |id: MenuItemId, state: ItemState| match store.set_state(id, state) {
        Ok(item) => toasts.success(format!(
            "Menu item {} successfully!",
            item.admin_status_label().to_lowercase()
        )),
        Err(err) => toasts.error(err.to_string()),
    };

    view! {
        <div class="page page--admin">
            <PageHeader
                title="Admin Panel"
                subtitle="Manage your cafeteria menu items and scheduling".to_string()
            >
                <Button on_click=Callback::new(open_blank_form)>
                    {icon("plus")}
                    "Add Item"
                </Button>
            </PageHeader>

            <div class="admin-stats">
                <StatCard
                    label="Total Items".to_string()
                    icon_name="calendar".to_string()
                    value=Signal::derive(move || store.stats().total)
                />
                <StatCard
                    label="Published".to_string()
                    icon_name="check".to_string()
                    accent="success".to_string()
                    value=Signal::derive(move || store.stats().published)
                />
                <StatCard
                    label="Pending".to_string()
                    icon_name="clock".to_string()
                    accent="warning".to_string()
                    value=Signal::derive(move || store.stats().pending)
                />
            </div>

            {move || {
                if is_form_open.get() {
                    view! {
                        <MenuItemForm
                            form=form
                            editing=Signal::derive(move || editing_item.get().is_some())
                            on_submit=Callback::new(move |_| on_submit())
                            on_cancel=Callback::new(move |_| {
                                form.set(AdminFormState::default());
                                set_editing_item.set(None);
                                set_is_form_open.set(false);
                            })
                        />
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Category"</th>
                        <th>"Price"</th>
                        <th>"Dietary"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.items()
                        key=|item| item.id
                        children=move |item| {
                            let id = item.id;
                            let state = item.state;
                            let item_for_edit = item.clone();
                            let state_badge = match state {
                                ItemState::Published => "success",
                                ItemState::Draft => "warning",
                                ItemState::Unavailable => "neutral",
                            };
                            let (toggle_label, toggle_target) = match state {
                                ItemState::Published => ("Mark Unavailable", ItemState::Unavailable),
                                _ => ("Publish", ItemState::Published),
                            };

                            view! {
                                <tr>
                                    <td class="admin-table__name">{item.name.clone()}</td>
                                    <td>
                                        <Badge variant=category_badge_variant(item.category).to_string()>
                                            {item.category.display_name()}
                                        </Badge>
                                    </td>
                                    <td>{format!("₹{}", item.price)}</td>
                                    <td>
                                        <Badge variant=dietary_badge_variant(item.dietary).to_string()>
                                            {item.dietary.display_name()}
                                        </Badge>
                                    </td>
                                    <td>
                                        <Badge variant=state_badge.to_string()>
                                            {item.admin_status_label()}
                                        </Badge>
                                    </td>
                                    <td class="admin-table__actions">
                                        <Button
                                            size="sm"
                                            variant="secondary"
                                            on_click=Callback::new(move |_| {
                                                on_set_state(id, toggle_target)
                                            })
                                        >
                                            {toggle_label}
                                        </Button>
                                        <Button
                                            size="sm"
                                            variant="ghost"
                                            on_click=Callback::new(move |_| on_edit(&item_for_edit))
                                        >
                                            {icon("edit")}
                                        </Button>
                                        <Button
                                            size="sm"
                                            variant="ghost"
                                            on_click=Callback::new(move |_| on_delete(id))
                                        >
                                            {icon("trash")}
                                        </Button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
