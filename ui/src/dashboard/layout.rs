//! View structures derived from the presentation state.
//!
//! `Screen::from_state` is the only place that decides what the page shows;
//! components render the resulting structures without further decisions.

use api::{AssessmentRecord, ProfileRecord, ScoredItem};

use crate::core::format::{format_percent, format_value};

use super::charts::{ring_segments, ChartFrame, LineChart, RadarChart, RingArc};
use super::config::{CompetencyItem, DisplayConfig, QualityItem, RingStyle};
use super::state::PresentationState;

pub const RADAR_SIZE: f64 = 256.0;

/// Top-level page content. Exactly one of the three panels is shown.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Loading,
    Error { message: String },
    Dashboard(Box<DashboardView>),
}

impl Screen {
    pub fn from_state(state: &PresentationState, config: &DisplayConfig) -> Self {
        match state {
            PresentationState::Loading => Screen::Loading,
            PresentationState::Error { message } => Screen::Error {
                message: message.clone(),
            },
            PresentationState::Ready {
                profile,
                assessment,
            } => Screen::Dashboard(Box::new(DashboardView::build(profile, assessment, config))),
        }
    }

    pub fn dashboard(&self) -> Option<&DashboardView> {
        match self {
            Screen::Dashboard(view) => Some(view),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub profile: ProfileCard,
    pub scores: Vec<ScoreBar>,
    pub trend: LineChart,
    pub summary: SummaryLine,
    pub qualities_left: Vec<ScoreBar>,
    pub qualities_right: Vec<ScoreBar>,
    pub radar: RadarChart,
    pub competencies: Vec<Ring>,
}

impl DashboardView {
    pub fn build(
        profile: &ProfileRecord,
        assessment: &AssessmentRecord,
        config: &DisplayConfig,
    ) -> Self {
        Self {
            profile: ProfileCard::from_record(profile),
            scores: assessment.scored_items.iter().map(ScoreBar::from_item).collect(),
            trend: LineChart::layout(&assessment.trend, &config.line, ChartFrame::TREND),
            summary: SummaryLine::from_record(assessment),
            qualities_left: quality_bars(&config.qualities_left, &config.quality_color),
            qualities_right: quality_bars(&config.qualities_right, &config.quality_color),
            radar: RadarChart::layout(&config.radar, RADAR_SIZE),
            competencies: config
                .competencies
                .iter()
                .map(|item| Ring::from_item(item, &config.ring))
                .collect(),
        }
    }
}

/// Labelled profile fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoKind {
    Birthday,
    Birthplace,
    Position,
    Candidate,
}

/// Physical indicators listed on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicalKind {
    Height,
    Weight,
    Index,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCard {
    pub portrait_src: String,
    pub portrait_alt: String,
    pub name: String,
    pub father_name: String,
    pub fields: Vec<(InfoKind, String)>,
    pub physical: Vec<(PhysicalKind, String)>,
}

impl ProfileCard {
    pub fn from_record(record: &ProfileRecord) -> Self {
        let name = record.display_name();
        Self {
            portrait_src: record.image_url.clone(),
            portrait_alt: name.clone(),
            name,
            father_name: record.father_name.clone(),
            fields: vec![
                (InfoKind::Birthday, record.birthday.clone()),
                (InfoKind::Birthplace, record.address.clone()),
                (InfoKind::Position, record.position.clone()),
                (InfoKind::Candidate, record.candidate.clone()),
            ],
            physical: vec![
                (PhysicalKind::Height, record.height.clone()),
                (PhysicalKind::Weight, record.weight.clone()),
                (PhysicalKind::Index, record.index.clone()),
            ],
        }
    }
}

/// One percentage bar. `value_label` and `fill_width` carry the input verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBar {
    pub label: String,
    pub percentage: f64,
    pub color: String,
    pub value_label: String,
    pub fill_width: String,
}

impl ScoreBar {
    pub fn new(label: &str, percentage: f64, color: &str) -> Self {
        Self {
            label: label.to_string(),
            percentage,
            color: color.to_string(),
            value_label: format_percent(percentage),
            fill_width: format_percent(percentage),
        }
    }

    pub fn from_item(item: &ScoredItem) -> Self {
        Self::new(&item.label, item.percentage, &item.color)
    }

    /// Inline style for the filled part of the track.
    pub fn fill_style(&self) -> String {
        format!("width: {}; background-color: {};", self.fill_width, self.color)
    }
}

fn quality_bars(items: &[QualityItem], color: &str) -> Vec<ScoreBar> {
    items
        .iter()
        .map(|item| ScoreBar::new(&item.label, item.percentage, color))
        .collect()
}

/// One doughnut indicator: value segment, complement segment and label.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub label: String,
    pub color: String,
    pub track_color: String,
    pub segments: [f64; 2],
    pub arc: RingArc,
    pub value_label: String,
}

impl Ring {
    pub fn from_item(item: &CompetencyItem, style: &RingStyle) -> Self {
        Self {
            label: item.label.clone(),
            color: item.color.clone(),
            track_color: style.track_color.clone(),
            segments: ring_segments(item.percentage),
            arc: RingArc::new(item.percentage, style),
            value_label: format_percent(item.percentage),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    pub overall: String,
    pub better_than: String,
}

impl SummaryLine {
    pub fn from_record(record: &AssessmentRecord) -> Self {
        Self {
            overall: record.overall.clone(),
            better_than: format_value(record.better_than_peers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::TrendSeries;

    fn profile() -> ProfileRecord {
        ProfileRecord {
            first_name: "Oyatillo".into(),
            last_name: "Karimov".into(),
            father_name: "Akmal o'g'li".into(),
            birthday: "12.04.1990".into(),
            address: "Toshkent".into(),
            position: "Bo'lim boshlig'i".into(),
            candidate: "Rahbar".into(),
            height: "180 sm".into(),
            weight: "78 kg".into(),
            index: "24.1".into(),
            image_url: "/portrait.jpg".into(),
        }
    }

    fn assessment() -> AssessmentRecord {
        AssessmentRecord {
            scored_items: vec![
                ScoredItem {
                    label: "Mantiq".into(),
                    percentage: 86.0,
                    color: "#22c55e".into(),
                },
                ScoredItem {
                    label: "Huquq".into(),
                    percentage: 130.0,
                    color: "#ef4444".into(),
                },
            ],
            trend: TrendSeries {
                labels: vec!["2021".into(), "2022".into(), "2023".into()],
                data: vec![60.0, 72.0, 81.0],
            },
            overall: "Yaxshi".into(),
            better_than_peers: 68.0,
        }
    }

    #[test]
    fn loading_and_error_states_show_no_dashboard() {
        let config = DisplayConfig::default();
        assert_eq!(
            Screen::from_state(&PresentationState::Loading, &config),
            Screen::Loading
        );

        let screen = Screen::from_state(
            &PresentationState::Error {
                message: "Failed to load data (HTTP 500 Internal Server Error)".into(),
            },
            &config,
        );
        assert!(screen.dashboard().is_none());
        match screen {
            Screen::Error { message } => assert!(!message.is_empty()),
            other => panic!("expected error screen, got {other:?}"),
        }
    }

    #[test]
    fn ready_state_builds_every_section() {
        let config = DisplayConfig::default();
        let state = PresentationState::Ready {
            profile: profile(),
            assessment: assessment(),
        };
        let screen = Screen::from_state(&state, &config);
        let view = screen.dashboard().expect("dashboard");

        assert_eq!(view.profile.name, "Oyatillo Karimov");
        assert_eq!(view.profile.portrait_alt, "Oyatillo Karimov");
        assert_eq!(view.profile.fields.len(), 4);
        assert_eq!(view.profile.physical[0], (PhysicalKind::Height, "180 sm".into()));
        assert_eq!(view.scores.len(), 2);
        assert_eq!(view.trend.points.len(), 3);
        assert_eq!(view.radar.axes.len(), config.radar.axes.len());
        assert_eq!(view.qualities_left.len(), 4);
        assert_eq!(view.qualities_right.len(), 4);
        assert_eq!(view.competencies.len(), 6);
        assert_eq!(view.summary.overall, "Yaxshi");
        assert_eq!(view.summary.better_than, "68");
    }

    #[test]
    fn bars_reproduce_percentage_verbatim() {
        let bar = ScoreBar::from_item(&ScoredItem {
            label: "Mantiq".into(),
            percentage: 86.0,
            color: "#22c55e".into(),
        });
        assert_eq!(bar.value_label, "86%");
        assert_eq!(bar.fill_width, "86%");
        assert_eq!(bar.fill_style(), "width: 86%; background-color: #22c55e;");
    }

    #[test]
    fn bars_do_not_clamp_out_of_range_values() {
        let over = ScoreBar::new("over", 130.0, "#000");
        assert_eq!(over.value_label, "130%");
        assert_eq!(over.fill_width, "130%");

        let under = ScoreBar::new("under", -4.5, "#000");
        assert_eq!(under.fill_width, "-4.5%");
    }

    #[test]
    fn quality_bars_use_the_shared_color() {
        let config = DisplayConfig::default();
        let view = DashboardView::build(&profile(), &assessment(), &config);
        assert!(view
            .qualities_left
            .iter()
            .chain(view.qualities_right.iter())
            .all(|bar| bar.color == config.quality_color));
        assert_eq!(view.qualities_left[0].value_label, "90%");
    }

    #[test]
    fn rings_pair_value_with_complement() {
        let style = RingStyle::default();
        for (percentage, expected) in [(0.0, [0.0, 100.0]), (100.0, [100.0, 0.0]), (33.0, [33.0, 67.0])] {
            let ring = Ring::from_item(
                &CompetencyItem {
                    label: "x".into(),
                    percentage,
                    color: "#22c55e".into(),
                },
                &style,
            );
            assert_eq!(ring.segments, expected);
            assert_eq!(ring.track_color, style.track_color);
        }
    }
}
