//! Candidate dashboard: one load of the two remote records, then a static render.

pub mod charts;
pub mod config;
pub mod layout;
pub mod state;

mod panels;
pub use panels::{ErrorPanel, LoadingPanel, ResultSummary};

mod profile;
pub use profile::ProfileHeader;

mod scores;
pub use scores::{QualityColumns, ScoreGrid};

mod trend;
pub use trend::TrendChart;

mod radar;
pub use radar::SkillRadar;

mod rings;
pub use rings::CompetencyRings;

use api::{EndpointConfig, RemoteDataSource};
use dioxus::prelude::*;
use tracing::info;

use crate::i18n::use_language_marker;
use crate::t;
use config::DisplayConfig;
use layout::{DashboardView, Screen};
use state::{load_dashboard, DashboardViewModel, PresentationState};

/// Loads both records once on mount and renders whichever panel the settled
/// state calls for.
///
/// The data source and display datasets come from context when the launcher
/// provides them.
#[component]
pub fn Dashboard() -> Element {
    let source = use_hook(|| {
        try_consume_context::<RemoteDataSource>()
            .unwrap_or_else(|| RemoteDataSource::new(EndpointConfig::from_env()))
    });
    let display = use_hook(|| try_consume_context::<DisplayConfig>().unwrap_or_default());

    let mut view_model = use_signal(DashboardViewModel::new);
    let _lang = use_language_marker();

    use_future(move || {
        let source = source.clone();
        async move {
            let fallback = t!("error-unknown");
            let next = load_dashboard(source.fetch_both(), &fallback).await;
            log_outcome(&next);
            view_model.with_mut(|vm| vm.settle(next));
        }
    });

    let screen = Screen::from_state(view_model.read().state(), &display);

    match screen {
        Screen::Loading => rsx! { LoadingPanel {} },
        Screen::Error { message } => rsx! { ErrorPanel { message } },
        Screen::Dashboard(view) => render_dashboard(*view, &display),
    }
}

fn log_outcome(state: &PresentationState) {
    match state {
        PresentationState::Ready { assessment, .. } => info!(
            scores = assessment.scored_items.len(),
            trend_points = assessment.trend.len(),
            "dashboard data loaded"
        ),
        PresentationState::Error { message } => info!(%message, "dashboard data unavailable"),
        PresentationState::Loading => {}
    }
}

fn render_dashboard(view: DashboardView, display: &DisplayConfig) -> Element {
    let DashboardView {
        profile,
        scores,
        trend,
        summary,
        qualities_left,
        qualities_right,
        radar,
        competencies,
    } = view;

    rsx! {
        div { class: "dossier",
            ProfileHeader { card: profile }

            section { class: "dossier-card dossier-knowledge",
                h2 { class: "dossier-section__title", {t!("knowledge-title")} }
                ScoreGrid { bars: scores }

                div { class: "dossier-knowledge__trend",
                    h3 { class: "dossier-section__subtitle", {t!("trend-title")} }
                    TrendChart {
                        chart: trend,
                        style: display.line.clone(),
                        series_label: t!("trend-series-label"),
                    }
                }

                ResultSummary { summary }
            }

            section { class: "dossier-card dossier-personal",
                h2 { class: "dossier-section__title", {t!("qualities-title")} }
                QualityColumns { left: qualities_left, right: qualities_right,
                    SkillRadar { chart: radar, dataset: display.radar.clone() }
                }
            }

            section { class: "dossier-card dossier-competencies",
                h2 { class: "dossier-section__title dossier-section__title--accent",
                    {t!("competencies-title")}
                }
                CompetencyRings { rings: competencies }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::TrendSeries;
    use charts::{ChartFrame, LineChart, RadarChart};
    use layout::{Ring, RADAR_SIZE};

    fn svg_sections() -> Element {
        let display = DisplayConfig::default();
        let trend = LineChart::layout(
            &TrendSeries {
                labels: vec!["2022".into(), "2023".into()],
                data: vec![60.0, 81.0],
            },
            &display.line,
            ChartFrame::TREND,
        );
        let radar = RadarChart::layout(&display.radar, RADAR_SIZE);
        let rings: Vec<Ring> = display
            .competencies
            .iter()
            .map(|item| Ring::from_item(item, &display.ring))
            .collect();

        rsx! {
            TrendChart { chart: trend, style: display.line.clone(), series_label: "Scores" }
            SkillRadar { chart: radar, dataset: display.radar.clone() }
            CompetencyRings { rings }
        }
    }

    #[test]
    fn chart_components_render() {
        let mut dom = VirtualDom::new(svg_sections);
        dom.rebuild_in_place();
    }
}
