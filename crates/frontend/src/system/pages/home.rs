use crate::layout::global_context::{AppGlobalContext, AppPage};
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;

struct Feature {
    icon_name: &'static str,
    title: &'static str,
    description: &'static str,
    target: AppPage,
}

fn features() -> Vec<Feature> {
    vec![
        Feature {
            icon_name: "clock",
            title: "Today's Menu",
            description: "View today's fresh offerings with dietary information and pricing",
            target: AppPage::TodaysMenu,
        },
        Feature {
            icon_name: "calendar",
            title: "Weekly Planning",
            description: "Plan your meals with our comprehensive weekly menu overview",
            target: AppPage::WeeklyMenu,
        },
        Feature {
            icon_name: "users",
            title: "Employee Focused",
            description: "Designed specifically for employee convenience and meal planning",
            target: AppPage::About,
        },
        Feature {
            icon_name: "settings",
            title: "Easy Management",
            description: "Streamlined admin tools for efficient menu management",
            target: AppPage::Admin,
        },
    ]
}

/// Landing page with links into the rest of the portal
#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="page page--home">
            <section class="hero">
                <h1 class="hero__title">"Welcome to Our Cafeteria Portal"</h1>
                <p class="hero__subtitle">
                    "Discover fresh, delicious meals daily. Plan your dining experience \
                     with our comprehensive menu system designed for employee convenience."
                </p>
                <div class="hero__actions">
                    <Button on_click=Callback::new(move |_| ctx.navigate(AppPage::TodaysMenu))>
                        "View Today's Menu"
                    </Button>
                    <Button
                        variant="secondary"
                        on_click=Callback::new(move |_| ctx.navigate(AppPage::WeeklyMenu))
                    >
                        "Weekly Menu"
                    </Button>
                </div>
            </section>

            <section class="feature-grid">
                {features()
                    .into_iter()
                    .map(|feature| {
                        let target = feature.target;
                        view! {
                            <div
                                class="feature-card"
                                on:click=move |_| ctx.navigate(target)
                            >
                                {icon(feature.icon_name)}
                                <h3 class="feature-card__title">{feature.title}</h3>
                                <p class="feature-card__description">{feature.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
