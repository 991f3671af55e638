use leptos::prelude::*;

/// Pages of the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPage {
    Home,
    TodaysMenu,
    WeeklyMenu,
    Admin,
    About,
}

impl AppPage {
    /// Label used in the header navigation
    pub fn nav_label(&self) -> &'static str {
        match self {
            AppPage::Home => "Home",
            AppPage::TodaysMenu => "Today's Menu",
            AppPage::WeeklyMenu => "Weekly Menu",
            AppPage::Admin => "Admin",
            AppPage::About => "About",
        }
    }

    /// All pages in navigation order
    pub fn all() -> Vec<AppPage> {
        vec![
            AppPage::Home,
            AppPage::TodaysMenu,
            AppPage::WeeklyMenu,
            AppPage::Admin,
            AppPage::About,
        ]
    }
}

/// App-wide navigation state, provided via context from `App`
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_page: RwSignal<AppPage>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_page: RwSignal::new(AppPage::Home),
        }
    }

    pub fn navigate(&self, page: AppPage) {
        self.active_page.set(page);
    }

    pub fn is_active(&self, page: AppPage) -> bool {
        self.active_page.get() == page
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
