//! Dashboard App
//!
//! Main application component: sidebar, widget grid, kanban board, and the
//! floating notification tray and assistant panel.

use board_core::{AnimTarget, Command, Dashboard, DashboardConfig, Seed};
use leptos::prelude::*;

use crate::animation;
use crate::components::{
    AssistantPanel, CalendarWidget, ChecklistWidget, KanbanBoard, NotificationTray, QuickAddButton, Sidebar,
    TaskWidget, TopBar,
};
use crate::context::DashboardContext;

/// Id of the optional inline JSON config block in index.html
const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Read the page's config block, falling back to defaults
fn load_config() -> DashboardConfig {
    let Some(raw) = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return DashboardConfig::default();
    };
    DashboardConfig::from_json(&raw).unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring page config");
        DashboardConfig::default()
    })
}

#[component]
pub fn App() -> impl IntoView {
    let dashboard = match Dashboard::new(Seed::demo(), load_config()) {
        Ok(dashboard) => dashboard,
        Err(err) => {
            tracing::error!(%err, "dashboard failed to start");
            return view! { <p class="boot-error">{format!("Dashboard failed to start: {err}")}</p> }.into_any();
        }
    };

    let ctx = DashboardContext::new(dashboard);
    provide_context(ctx);
    animation::register_plugins();

    // Entrance choreography once the tree is mounted
    Effect::new(move |_| ctx.dispatch(Command::Boot));

    view! {
        <div class="dashboard">
            <Sidebar />

            <main class="main-content">
                <TopBar />

                <section class="widget-grid">
                    <TaskWidget />
                    <ChecklistWidget />
                    <CalendarWidget />
                </section>

                <KanbanBoard />

                <footer data-anim=AnimTarget::Footer.key()>
                    <p>"Workspace dashboard · nothing here is saved between visits"</p>
                </footer>
            </main>

            <NotificationTray />
            <AssistantPanel />
            <QuickAddButton />
        </div>
    }
    .into_any()
}
