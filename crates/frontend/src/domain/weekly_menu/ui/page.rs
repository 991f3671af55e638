use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::icons::icon;
use chrono::{Local, NaiveDate};
use contracts::domain::weekly_menu::{
    format_short_date, is_today, menu_for_date, week_dates, week_range_label, WEEK_DAY_NAMES,
};
use leptos::prelude::*;

/// Read-only weekly planner with previous/next week navigation
#[component]
pub fn WeeklyMenu() -> impl IntoView {
    let (week_offset, set_week_offset) = signal(0_i64);

    // Local calendar date; the planner compares days, not instants
    let today = move || Local::now().date_naive();
    let dates = move || week_dates(today(), week_offset.get());

    view! {
        <div class="page page--weekly-menu">
            <PageHeader title="Weekly Menu" subtitle="Plan your meals for the week ahead".to_string() />

            <div class="week-nav">
                <Button
                    variant="secondary"
                    size="sm"
                    on_click=Callback::new(move |_| set_week_offset.update(|w| *w -= 1))
                >
                    {icon("chevron-left")}
                    "Previous Week"
                </Button>
                <Badge variant="primary".to_string() class="week-nav__range".to_string()>
                    {move || week_range_label(&dates())}
                </Badge>
                <Button
                    variant="secondary"
                    size="sm"
                    on_click=Callback::new(move |_| set_week_offset.update(|w| *w += 1))
                >
                    "Next Week"
                    {icon("chevron-right")}
                </Button>
            </div>

            <div class="week-grid">
                {move || {
                    let today = today();
                    dates()
                        .into_iter()
                        .enumerate()
                        .map(|(index, date)| {
                            view! { <DayCard index=index date=date today=today /> }
                        })
                        .collect_view()
                }}
            </div>

            <div class="week-legend">
                <span class="week-legend__entry week-legend__entry--breakfast">"Breakfast"</span>
                <span class="week-legend__entry week-legend__entry--lunch">"Lunch"</span>
                <span class="week-legend__entry week-legend__entry--snacks">"Snacks"</span>
            </div>
        </div>
    }
}

#[component]
fn DayCard(index: usize, date: NaiveDate, today: NaiveDate) -> impl IntoView {
    let menu = menu_for_date(date);
    let highlight = is_today(date, today);
    let card_class = if highlight {
        "day-card day-card--today"
    } else {
        "day-card"
    };

    view! {
        <div class=card_class>
            <div class="day-card__header">
                <div class="day-card__weekday">{WEEK_DAY_NAMES[index]}</div>
                <div class="day-card__date">{format_short_date(date)}</div>
                {highlight.then(|| view! { <Badge variant="primary".to_string()>"Today"</Badge> })}
            </div>
            <MealSection title="Breakfast" slot_class="day-card__meal--breakfast" entries=menu.breakfast.clone() />
            <MealSection title="Lunch" slot_class="day-card__meal--lunch" entries=menu.lunch.clone() />
            <MealSection title="Snacks" slot_class="day-card__meal--snacks" entries=menu.snacks />
        </div>
    }
}

#[component]
fn MealSection(
    title: &'static str,
    slot_class: &'static str,
    entries: Vec<String>,
) -> impl IntoView {
    view! {
        <div class=format!("day-card__meal {slot_class}")>
            <h4 class="day-card__meal-title">{title}</h4>
            <ul class="day-card__meal-list">
                {entries
                    .into_iter()
                    .map(|entry| view! { <li>{entry}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
