use dioxus::prelude::*;

use crate::dashboard::layout::SummaryLine;
use crate::i18n::use_language_marker;
use crate::t;

#[component]
pub fn LoadingPanel() -> Element {
    let _lang = use_language_marker();
    rsx! {
        div { class: "dossier-status",
            div { class: "dossier-status__card",
                div { class: "dossier-spinner", aria_hidden: "true" }
                p { class: "dossier-status__text", {t!("loading-message")} }
            }
        }
    }
}

/// Replaces the whole dashboard when either request failed.
#[component]
pub fn ErrorPanel(message: String) -> Element {
    rsx! {
        div { class: "dossier-status",
            div { class: "dossier-status__card", role: "alert",
                p { class: "dossier-status__error", "{message}" }
            }
        }
    }
}

#[component]
pub fn ResultSummary(summary: SummaryLine) -> Element {
    let _lang = use_language_marker();
    rsx! {
        div { class: "dossier-summary",
            h2 { class: "dossier-summary__overall",
                {t!("summary-overall", overall = summary.overall.as_str())}
            }
            p { class: "dossier-summary__standing",
                {t!("summary-better-than", percent = summary.better_than.as_str())}
            }
        }
    }
}
