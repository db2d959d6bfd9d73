use dioxus::prelude::*;

use crate::dashboard::Dashboard;
use crate::i18n::use_language_marker;
use crate::t;

/// Routed page wrapping the dashboard.
///
/// A locale switch re-renders the translated chrome in place; the dashboard
/// below keeps its loaded state across the switch.
#[component]
pub fn DashboardPage() -> Element {
    let lang_marker = use_language_marker();

    #[cfg(debug_assertions)]
    tracing::debug!(lang = %lang_marker, "DashboardPage render");

    rsx! {
        section { class: "page page-dashboard",
            div { style: "display:none", "{lang_marker}" }
            h1 { class: "visually-hidden", {t!("page-title")} }
            Dashboard {}
        }
    }
}
