use super::card::MenuCard;
use crate::domain::menu_item::store::use_menu_store;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use contracts::domain::menu_item::{available_count, MenuFilter};
use contracts::enums::{DietaryTag, MenuCategory};
use leptos::prelude::*;

/// Customer-facing daily menu: filter button rows over the live collection
#[component]
pub fn TodaysMenu() -> impl IntoView {
    let store = use_menu_store();

    let (filter, set_filter) = signal(MenuFilter::default());

    let filtered = move || filter.get().apply(&store.items());
    let available = move || available_count(&filtered());

    view! {
        <div class="page page--daily-menu">
            <PageHeader
                title="Today's Menu"
                subtitle="Fresh offerings with dietary information and pricing".to_string()
            />

            <div class="filter-rows">
                <div class="filter-row">
                    <span class="filter-row__label">"Category:"</span>
                    <button
                        class=move || filter_button_class(filter.get().category.is_none())
                        on:click=move |_| set_filter.update(|f| f.category = None)
                    >
                        "All"
                    </button>
                    <For
                        each=MenuCategory::all
                        key=|category| category.code()
                        children=move |category| {
                            view! {
                                <button
                                    class=move || filter_button_class(
                                        filter.get().category == Some(category),
                                    )
                                    on:click=move |_| {
                                        set_filter.update(|f| f.category = Some(category))
                                    }
                                >
                                    {category.display_name()}
                                </button>
                            }
                        }
                    />
                </div>

                <div class="filter-row">
                    <span class="filter-row__label">"Dietary:"</span>
                    <button
                        class=move || filter_button_class(filter.get().dietary.is_none())
                        on:click=move |_| set_filter.update(|f| f.dietary = None)
                    >
                        "All"
                    </button>
                    <For
                        each=DietaryTag::all
                        key=|dietary| dietary.code()
                        children=move |dietary| {
                            view! {
                                <button
                                    class=move || filter_button_class(
                                        filter.get().dietary == Some(dietary),
                                    )
                                    on:click=move |_| {
                                        set_filter.update(|f| f.dietary = Some(dietary))
                                    }
                                >
                                    {dietary.display_name()}
                                </button>
                            }
                        }
                    />
                </div>
            </div>

            <div class="daily-menu__summary">
                <span class="daily-menu__count">
                    {move || {
                        let shown = filtered().len();
                        format!("{} of {} items available", available(), shown)
                    }}
                </span>
                {move || {
                    let current = filter.get();
                    (!current.is_empty()).then(|| {
                        let active = current.active_count();
                        let chip = if active == 1 {
                            "1 filter active".to_string()
                        } else {
                            format!("{active} filters active")
                        };
                        view! {
                            <Badge variant="primary".to_string()>{chip}</Badge>
                            <button
                                class="filter-button"
                                on:click=move |_| set_filter.set(MenuFilter::default())
                            >
                                "Clear filters"
                            </button>
                        }
                    })
                }}
            </div>

            {move || {
                let items = filtered();
                if items.is_empty() {
                    view! {
                        <div class="daily-menu__empty">
                            "No items match the selected filters."
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="daily-menu__grid">
                            <For
                                each=move || filtered()
                                key=|item| item.id
                                children=move |item| view! { <MenuCard item=item /> }
                            />
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

fn filter_button_class(active: bool) -> &'static str {
    if active {
        "filter-button filter-button--active"
    } else {
        "filter-button"
    }
}
