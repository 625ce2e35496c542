//! UI Components
//!
//! Reusable Leptos components.

mod content;
mod dashboard;
mod nav_item;
mod sidebar;
mod stat_card;
mod task_card;
mod task_form;
mod task_panel;
mod top_bar;

pub use content::ContentView;
pub use dashboard::DashboardPanel;
pub use nav_item::NavItemRow;
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
pub use task_card::TaskCard;
pub use task_form::NewTaskForm;
pub use task_panel::TaskPanel;
pub use top_bar::TopBar;
