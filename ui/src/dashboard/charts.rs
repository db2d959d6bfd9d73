//! SVG geometry for the trend line, the skill radar and the doughnut rings.
//!
//! Everything here is plain arithmetic on the input data. Components in this
//! module's siblings only turn the results into `rsx!` nodes.

use std::f64::consts::PI;

use api::TrendSeries;

use super::config::{LineStyle, RadarDataset, RingStyle};

/// Outer box and padding of a cartesian chart, in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub pad_left: f64,
    pub pad_right: f64,
    pub pad_top: f64,
    pub pad_bottom: f64,
}

impl ChartFrame {
    pub const TREND: ChartFrame = ChartFrame {
        width: 720.0,
        height: 280.0,
        pad_left: 44.0,
        pad_right: 16.0,
        pad_top: 16.0,
        pad_bottom: 32.0,
    };

    fn plot_left(&self) -> f64 {
        self.pad_left
    }

    fn plot_right(&self) -> f64 {
        self.width - self.pad_right
    }

    fn plot_top(&self) -> f64 {
        self.pad_top
    }

    fn plot_bottom(&self) -> f64 {
        self.height - self.pad_bottom
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

/// Laid-out line chart: points in input order, y ticks and the stroke path.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub frame: ChartFrame,
    pub points: Vec<PlotPoint>,
    pub ticks: Vec<AxisTick>,
    pub path: String,
}

const TARGET_TICKS: usize = 5;
/// Upper bound on y-axis intervals, whatever the data magnitude.
const MAX_TICK_STEPS: usize = 10;

impl LineChart {
    pub fn layout(series: &TrendSeries, style: &LineStyle, frame: ChartFrame) -> Self {
        let values: Vec<f64> = series.points().map(|(_, value)| value).collect();
        let (min, max, step) = nice_scale(&values);

        let top = frame.plot_top();
        let bottom = frame.plot_bottom();
        let span = max - min;
        let to_y = |value: f64| {
            if span > 0.0 && span.is_finite() {
                bottom - (value - min) / span * (bottom - top)
            } else {
                (top + bottom) / 2.0
            }
        };

        let count = series.len();
        let left = frame.plot_left();
        let right = frame.plot_right();
        let to_x = |index: usize| {
            if count <= 1 {
                (left + right) / 2.0
            } else {
                left + index as f64 * (right - left) / (count - 1) as f64
            }
        };

        let points: Vec<PlotPoint> = series
            .points()
            .enumerate()
            .map(|(index, (label, value))| PlotPoint {
                label: label.to_string(),
                value,
                x: to_x(index),
                y: to_y(value),
            })
            .collect();

        let steps = tick_steps(min, max, step);
        let ticks = (0..=steps)
            .map(|i| {
                let value = if i == steps {
                    max
                } else {
                    min + i as f64 * step
                };
                AxisTick {
                    value,
                    y: to_y(value),
                    label: format_tick(value),
                }
            })
            .collect();

        let path = spline_path(&points, style.tension, top, bottom);

        Self {
            frame,
            points,
            ticks,
            path,
        }
    }
}

/// Rounded axis bounds covering `values`, plus the tick step.
fn nice_scale(values: &[f64]) -> (f64, f64, f64) {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return (0.0, 100.0, 20.0);
    }

    let mut lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        let pad = (lo.abs() * 0.05).max(1.0);
        lo -= pad;
        hi += pad;
    }

    let step = nice_number((hi - lo) / (TARGET_TICKS - 1) as f64);
    if !step.is_finite() || step <= 0.0 {
        return (lo, hi, hi - lo);
    }
    let min = (lo / step).floor() * step;
    let max = (hi / step).ceil() * step;
    (min, max, step)
}

/// Number of intervals between `min` and `max`, computed rather than
/// accumulated so huge magnitudes where `value + step == value` still end.
fn tick_steps(min: f64, max: f64, step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 1;
    }
    let steps = ((max - min) / step).round();
    if steps.is_finite() && steps >= 1.0 {
        (steps as usize).min(MAX_TICK_STEPS)
    } else {
        1
    }
}

fn nice_number(raw: f64) -> f64 {
    let exponent = raw.log10().floor();
    let magnitude = 10f64.powf(exponent);
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn format_tick(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Cardinal-style spline through `points`. Control points for each vertex are
/// scaled by the distances to its neighbours and capped to the plot's y range.
fn spline_path(points: &[PlotPoint], tension: f64, top: f64, bottom: f64) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };

    let mut path = format!("M{:.2} {:.2}", first.x, first.y);
    if points.len() == 1 {
        return path;
    }

    if tension <= 0.0 {
        for point in &points[1..] {
            path.push_str(&format!(" L{:.2} {:.2}", point.x, point.y));
        }
        return path;
    }

    let controls: Vec<((f64, f64), (f64, f64))> = (0..points.len())
        .map(|i| {
            let prev = &points[i.saturating_sub(1)];
            let cur = &points[i];
            let next = &points[(i + 1).min(points.len() - 1)];
            control_points(prev, cur, next, tension, top, bottom)
        })
        .collect();

    for i in 1..points.len() {
        let (_, out_cp) = controls[i - 1];
        let (in_cp, _) = controls[i];
        let point = &points[i];
        path.push_str(&format!(
            " C{:.2} {:.2}, {:.2} {:.2}, {:.2} {:.2}",
            out_cp.0, out_cp.1, in_cp.0, in_cp.1, point.x, point.y
        ));
    }

    path
}

fn control_points(
    prev: &PlotPoint,
    cur: &PlotPoint,
    next: &PlotPoint,
    tension: f64,
    top: f64,
    bottom: f64,
) -> ((f64, f64), (f64, f64)) {
    let d01 = ((cur.x - prev.x).powi(2) + (cur.y - prev.y).powi(2)).sqrt();
    let d12 = ((next.x - cur.x).powi(2) + (next.y - cur.y).powi(2)).sqrt();
    let total = d01 + d12;

    let (s01, s12) = if total > 0.0 {
        (d01 / total, d12 / total)
    } else {
        (0.0, 0.0)
    };
    let fa = tension * s01;
    let fb = tension * s12;

    let dx = next.x - prev.x;
    let dy = next.y - prev.y;
    let cap = |y: f64| y.clamp(top, bottom);

    (
        (cur.x - fa * dx, cap(cur.y - fa * dy)),
        (cur.x + fb * dx, cap(cur.y + fb * dy)),
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarAxis {
    pub label: String,
    pub end: (f64, f64),
    pub label_at: (f64, f64),
}

/// Laid-out radar: concentric grid polygons, spokes and the data polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarChart {
    pub size: f64,
    pub center: (f64, f64),
    pub grid: Vec<String>,
    pub axes: Vec<RadarAxis>,
    pub vertices: Vec<(f64, f64)>,
    pub polygon: String,
}

const RADAR_GRID_LEVELS: usize = 5;
const RADAR_LABEL_GAP: f64 = 18.0;

impl RadarChart {
    pub fn layout(dataset: &RadarDataset, size: f64) -> Self {
        let center = (size / 2.0, size / 2.0);
        let radius = size / 2.0 - RADAR_LABEL_GAP * 1.5;
        let count = dataset.axes.len();
        let scale_max = if dataset.scale_max > 0.0 {
            dataset.scale_max
        } else {
            1.0
        };

        let at = |index: usize, distance: f64| {
            let angle = -PI / 2.0 + index as f64 * 2.0 * PI / count.max(1) as f64;
            (
                center.0 + distance * angle.cos(),
                center.1 + distance * angle.sin(),
            )
        };

        let grid = (1..=RADAR_GRID_LEVELS)
            .map(|level| {
                let distance = radius * level as f64 / RADAR_GRID_LEVELS as f64;
                polygon_points((0..count).map(|i| at(i, distance)))
            })
            .collect();

        let axes = dataset
            .axes
            .iter()
            .enumerate()
            .map(|(i, label)| RadarAxis {
                label: label.clone(),
                end: at(i, radius),
                label_at: at(i, radius + RADAR_LABEL_GAP),
            })
            .collect();

        let vertices: Vec<(f64, f64)> = (0..count)
            .map(|i| {
                let value = dataset.values.get(i).copied().unwrap_or(0.0);
                at(i, radius * value / scale_max)
            })
            .collect();
        let polygon = polygon_points(vertices.iter().copied());

        Self {
            size,
            center,
            grid,
            axes,
            vertices,
            polygon,
        }
    }
}

fn polygon_points(points: impl Iterator<Item = (f64, f64)>) -> String {
    points
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The two doughnut segments: the value and its complement to 100.
pub fn ring_segments(percentage: f64) -> [f64; 2] {
    [percentage, 100.0 - percentage]
}

/// Stroke geometry for a ring drawn as one SVG circle with a dash pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct RingArc {
    pub size: f64,
    pub radius: f64,
    pub stroke_width: f64,
    pub circumference: f64,
    /// `stroke-dasharray` for the value arc.
    pub dash: String,
}

impl RingArc {
    pub fn new(percentage: f64, style: &RingStyle) -> Self {
        let outer = style.size / 2.0;
        let inner = outer * style.cutout;
        let stroke_width = outer - inner;
        let radius = inner + stroke_width / 2.0;
        let circumference = 2.0 * PI * radius;

        let [value, rest] = ring_segments(percentage);
        let dash = format!(
            "{:.2} {:.2}",
            circumference * value / 100.0,
            circumference * rest / 100.0
        );

        Self {
            size: style.size,
            radius,
            stroke_width,
            circumference,
            dash,
        }
    }
}
