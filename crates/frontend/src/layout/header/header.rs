use crate::layout::global_context::{AppGlobalContext, AppPage};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Top navigation bar with one link per portal page
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <header class="header">
            <div class="header__brand" on:click=move |_| ctx.navigate(AppPage::Home)>
                {icon("utensils")}
                <span class="header__title">"Cafeteria Portal"</span>
            </div>
            <nav class="header__nav">
                <For
                    each=AppPage::all
                    key=|page| page.nav_label()
                    children=move |page| {
                        let class = move || {
                            if ctx.is_active(page) {
                                "header__link header__link--active"
                            } else {
                                "header__link"
                            }
                        };
                        view! {
                            <button
                                class=class
                                on:click=move |_| ctx.navigate(page)
                            >
                                {page.nav_label()}
                            </button>
                        }
                    }
                />
            </nav>
        </header>
    }
}
