//! Wire shapes for the profile and assessment endpoints.

use serde::Deserialize;

/// Personal record of the candidate shown in the dashboard header.
///
/// Every field is text as served; height, weight and index are not parsed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub first_name: String,
    pub last_name: String,
    pub father_name: String,
    pub birthday: String,
    pub address: String,
    pub position: String,
    pub candidate: String,
    pub height: String,
    pub weight: String,
    pub index: String,
    pub image_url: String,
}

impl ProfileRecord {
    /// "First Last", used for the heading and the portrait alt text.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One labelled score rendered as a coloured bar.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScoredItem {
    pub label: String,
    pub percentage: f64,
    pub color: String,
}

/// Parallel label/value sequences for the trend chart.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TrendSeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl TrendSeries {
    /// Pairs labels with values in order. Extra entries on either side are dropped.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.data.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.labels.len().min(self.data.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Assessment results: scored items, trend, overall verdict and peer standing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssessmentRecord {
    #[serde(rename = "semicharts")]
    pub scored_items: Vec<ScoredItem>,
    #[serde(rename = "lineChart")]
    pub trend: TrendSeries,
    pub overall: String,
    #[serde(rename = "thanOthers")]
    pub better_than_peers: f64,
}
