use crate::domain::menu_item::ui::admin::page::AdminPanel;
use crate::domain::menu_item::ui::daily::TodaysMenu;
use crate::domain::weekly_menu::ui::page::WeeklyMenu;
use crate::layout::global_context::{AppGlobalContext, AppPage};
use crate::layout::Shell;
use crate::system::pages::about::AboutPage;
use crate::system::pages::home::HomePage;
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <Shell center=move || {
            match ctx.active_page.get() {
                AppPage::Home => view! { <HomePage /> }.into_any(),
                AppPage::TodaysMenu => view! { <TodaysMenu /> }.into_any(),
                AppPage::WeeklyMenu => view! { <WeeklyMenu /> }.into_any(),
                AppPage::Admin => view! { <AdminPanel /> }.into_any(),
                AppPage::About => view! { <AboutPage /> }.into_any(),
            }
        } />
    }
}
