use dioxus::prelude::*;

use crate::dashboard::charts::LineChart;
use crate::dashboard::config::LineStyle;

/// Trend line drawn as inline SVG. Horizontal grid lines only, no legend.
#[component]
pub fn TrendChart(chart: LineChart, style: LineStyle, series_label: String) -> Element {
    let frame = chart.frame;
    let view_box = format!("0 0 {} {}", frame.width, frame.height);
    let grid_left = frame.pad_left;
    let grid_right = frame.width - frame.pad_right;
    let label_y = frame.height - frame.pad_bottom / 3.0;
    let tick_x = frame.pad_left - 8.0;

    rsx! {
        svg {
            class: "dossier-trend",
            view_box: "{view_box}",
            "role": "img",
            "aria-label": "{series_label}",

            for tick in chart.ticks.iter() {
                line {
                    x1: "{grid_left}",
                    x2: "{grid_right}",
                    y1: "{tick.y}",
                    y2: "{tick.y}",
                    stroke: "{style.grid_color}",
                    stroke_width: "1",
                }
                text {
                    class: "dossier-trend__tick",
                    x: "{tick_x}",
                    y: "{tick.y}",
                    text_anchor: "end",
                    dominant_baseline: "middle",
                    "{tick.label}"
                }
            }

            path {
                d: "{chart.path}",
                fill: "none",
                stroke: "{style.stroke}",
                stroke_width: "{style.stroke_width}",
                stroke_linejoin: "round",
            }

            for point in chart.points.iter() {
                circle {
                    cx: "{point.x}",
                    cy: "{point.y}",
                    r: "3",
                    fill: "{style.stroke}",
                    title { "{point.label}: {point.value}" }
                }
                text {
                    class: "dossier-trend__label",
                    x: "{point.x}",
                    y: "{label_y}",
                    text_anchor: "middle",
                    "{point.label}"
                }
            }
        }
    }
}
