//! Static display datasets and chart styling.
//!
//! None of this is fetched. Launchers provide a `DisplayConfig` through context
//! (falling back to `DisplayConfig::default()`), so render code never embeds
//! dataset literals.

/// Bar fill used when a dataset item carries no colour of its own.
pub const QUALITY_BAR_COLOR: &str = "#2563eb";
/// Muted track behind bars and ring complements.
pub const TRACK_COLOR: &str = "#e5e7eb";

#[derive(Debug, Clone, PartialEq)]
pub struct QualityItem {
    pub label: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompetencyItem {
    pub label: String,
    pub percentage: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarDataset {
    pub label: String,
    pub axes: Vec<String>,
    pub values: Vec<f64>,
    /// Value drawn at the outer ring; the scale starts at zero.
    pub scale_max: f64,
    pub fill: String,
    pub border: String,
    pub border_width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub stroke: String,
    pub stroke_width: f64,
    /// Bézier smoothing; 0 draws straight segments.
    pub tension: f64,
    pub grid_color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RingStyle {
    pub track_color: String,
    /// Inner hole as a fraction of the outer radius.
    pub cutout: f64,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub qualities_left: Vec<QualityItem>,
    pub qualities_right: Vec<QualityItem>,
    pub quality_color: String,
    pub radar: RadarDataset,
    pub competencies: Vec<CompetencyItem>,
    pub line: LineStyle,
    pub ring: RingStyle,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            qualities_left: qualities(&[
                ("Мақсадга интилувчанлик", 90.0),
                ("Эмоционал интеллект", 95.0),
                ("Креативлик", 75.0),
                ("Ходимларга йўналганлик", 86.0),
            ]),
            qualities_right: qualities(&[
                ("Топшириқларга йўналганлик", 95.0),
                ("Фаол ижтимоий муносабатлар", 75.0),
                ("Ўз устида ишлаш", 86.0),
                ("Муаммоли вазиятга йўналганлик", 86.0),
            ]),
            quality_color: QUALITY_BAR_COLOR.to_string(),
            radar: RadarDataset::default(),
            competencies: competencies(&[
                ("Стратегик фикрлаш", 85.0, "#22c55e"),
                ("Лидерлик", 100.0, "#2563eb"),
                ("Натижага йўналганлик", 75.0, "#22c55e"),
                ("Ўз-ўзини ривожлантириш", 98.0, "#22c55e"),
                ("Ўзгаришларни бошқариш", 33.0, "#ef4444"),
                ("Коммуникативлик", 45.0, "#f59e0b"),
            ]),
            line: LineStyle::default(),
            ring: RingStyle::default(),
        }
    }
}

impl Default for RadarDataset {
    fn default() -> Self {
        Self {
            label: "Skills".to_string(),
            axes: ["Photoshop", "Illustrator", "InDesign", "Premiere", "XD"]
                .into_iter()
                .map(String::from)
                .collect(),
            values: vec![80.0, 90.0, 75.0, 70.0, 85.0],
            scale_max: 100.0,
            fill: "rgba(54, 162, 235, 0.2)".to_string(),
            border: "rgba(54, 162, 235, 1)".to_string(),
            border_width: 2.0,
        }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            stroke: "#4CAF50".to_string(),
            stroke_width: 2.0,
            tension: 0.3,
            grid_color: "#f3f3f3".to_string(),
        }
    }
}

impl Default for RingStyle {
    fn default() -> Self {
        Self {
            track_color: TRACK_COLOR.to_string(),
            cutout: 0.75,
            size: 80.0,
        }
    }
}

fn qualities(items: &[(&str, f64)]) -> Vec<QualityItem> {
    items
        .iter()
        .map(|(label, percentage)| QualityItem {
            label: label.to_string(),
            percentage: *percentage,
        })
        .collect()
}

fn competencies(items: &[(&str, f64, &str)]) -> Vec<CompetencyItem> {
    items
        .iter()
        .map(|(label, percentage, color)| CompetencyItem {
            label: label.to_string(),
            percentage: *percentage,
            color: color.to_string(),
        })
        .collect()
}
