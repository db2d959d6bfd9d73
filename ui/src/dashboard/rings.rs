use dioxus::prelude::*;

use crate::dashboard::layout::Ring;

/// Competency doughnuts: the value arc over a muted full-circle track.
#[component]
pub fn CompetencyRings(rings: Vec<Ring>) -> Element {
    rsx! {
        div { class: "dossier-rings",
            for ring in rings.into_iter() {
                div { class: "dossier-ring",
                    {render_ring(&ring)}
                    span { class: "dossier-ring__label", "{ring.label}" }
                }
            }
        }
    }
}

fn render_ring(ring: &Ring) -> Element {
    let arc = &ring.arc;
    let center = arc.size / 2.0;
    let view_box = format!("0 0 {0} {0}", arc.size);
    // Start the value arc at twelve o'clock.
    let rotate = format!("rotate(-90 {center} {center})");

    rsx! {
        div { class: "dossier-ring__chart",
            svg { view_box: "{view_box}", "aria-hidden": "true",
                circle {
                    cx: "{center}",
                    cy: "{center}",
                    r: "{arc.radius}",
                    fill: "none",
                    stroke: "{ring.track_color}",
                    stroke_width: "{arc.stroke_width}",
                }
                circle {
                    cx: "{center}",
                    cy: "{center}",
                    r: "{arc.radius}",
                    fill: "none",
                    stroke: "{ring.color}",
                    stroke_width: "{arc.stroke_width}",
                    stroke_dasharray: "{arc.dash}",
                    transform: "{rotate}",
                }
            }
            span { class: "dossier-ring__value", "{ring.value_label}" }
        }
    }
}
