use dioxus::prelude::*;

use crate::dashboard::charts::RadarChart;
use crate::dashboard::config::RadarDataset;

#[component]
pub fn SkillRadar(chart: RadarChart, dataset: RadarDataset) -> Element {
    let view_box = format!("0 0 {0} {0}", chart.size);
    let (cx, cy) = chart.center;

    rsx! {
        svg {
            class: "dossier-radar",
            view_box: "{view_box}",
            "role": "img",
            "aria-label": "{dataset.label}",

            for ring in chart.grid.iter() {
                polygon { class: "dossier-radar__grid", points: "{ring}", fill: "none" }
            }
            for axis in chart.axes.iter() {
                line {
                    class: "dossier-radar__spoke",
                    x1: "{cx}",
                    y1: "{cy}",
                    x2: "{axis.end.0}",
                    y2: "{axis.end.1}",
                }
                text {
                    class: "dossier-radar__label",
                    x: "{axis.label_at.0}",
                    y: "{axis.label_at.1}",
                    text_anchor: "middle",
                    dominant_baseline: "middle",
                    "{axis.label}"
                }
            }
            polygon {
                points: "{chart.polygon}",
                fill: "{dataset.fill}",
                stroke: "{dataset.border}",
                stroke_width: "{dataset.border_width}",
            }
            for (x, y) in chart.vertices.iter() {
                circle { cx: "{x}", cy: "{y}", r: "3", fill: "{dataset.border}" }
            }
        }
    }
}
