use dioxus::prelude::*;

use crate::dashboard::layout::ScoreBar;

/// Fetched scores as a responsive grid of coloured bars.
#[component]
pub fn ScoreGrid(bars: Vec<ScoreBar>) -> Element {
    rsx! {
        div { class: "dossier-scores",
            for bar in bars.into_iter() {
                div { class: "dossier-score",
                    h3 { class: "dossier-score__label", "{bar.label}" }
                    div { class: "dossier-bar dossier-bar--tall",
                        div { class: "dossier-bar__fill", style: "{bar.fill_style()}" }
                    }
                    p { class: "dossier-score__value", "{bar.value_label}" }
                }
            }
        }
    }
}

/// Two columns of personal-quality bars around the radar.
#[component]
pub fn QualityColumns(left: Vec<ScoreBar>, right: Vec<ScoreBar>, children: Element) -> Element {
    rsx! {
        div { class: "dossier-qualities",
            QualityList { bars: left }
            div { class: "dossier-qualities__center", {children} }
            QualityList { bars: right }
        }
    }
}

#[component]
fn QualityList(bars: Vec<ScoreBar>) -> Element {
    rsx! {
        div { class: "dossier-qualities__column",
            for bar in bars.into_iter() {
                div { class: "dossier-quality",
                    div { class: "dossier-quality__header",
                        span { class: "dossier-quality__label", "{bar.label}" }
                        span { class: "dossier-quality__value", "{bar.value_label}" }
                    }
                    div { class: "dossier-bar",
                        div { class: "dossier-bar__fill", style: "{bar.fill_style()}" }
                    }
                }
            }
        }
    }
}
