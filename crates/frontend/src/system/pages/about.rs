use crate::shared::components::page_header::PageHeader;
use leptos::prelude::*;

/// Static information page
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page page--about">
            <PageHeader title="About" subtitle="Our cafeteria at a glance".to_string() />

            <div class="about">
                <p>
                    "The cafeteria portal keeps the daily and weekly menus at your \
                     fingertips. Browse today's dishes with dietary tags and prices, \
                     check what is planned for the rest of the week, and let the \
                     kitchen team keep everything up to date from the admin panel."
                </p>
                <ul class="about__facts">
                    <li>"Serving breakfast, lunch, snacks and beverages every workday"</li>
                    <li>"Vegan, vegetarian and gluten-free options marked on every item"</li>
                    <li>"Weekly plans published each Monday morning"</li>
                </ul>
            </div>
        </div>
    }
}
