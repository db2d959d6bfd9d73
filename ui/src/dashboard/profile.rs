use dioxus::prelude::*;

use crate::dashboard::layout::{InfoKind, PhysicalKind, ProfileCard};
use crate::i18n::use_language_marker;
use crate::t;

#[component]
pub fn ProfileHeader(card: ProfileCard) -> Element {
    let _lang = use_language_marker();
    let physical: Vec<String> = card
        .physical
        .iter()
        .map(|(kind, value)| physical_label(*kind, value))
        .collect();
    let last = physical.len().saturating_sub(1);

    rsx! {
        section { class: "dossier-card dossier-profile",
            div { class: "dossier-profile__portrait",
                img {
                    src: "{card.portrait_src}",
                    alt: "{card.portrait_alt}",
                    class: "dossier-profile__image",
                }
            }

            div { class: "dossier-profile__body",
                h1 { class: "dossier-profile__name", "{card.name}" }
                p { class: "dossier-profile__father", "{card.father_name}" }

                div { class: "dossier-profile__fields",
                    for (kind, value) in card.fields.iter() {
                        InfoField { label: info_label(*kind), value: value.clone() }
                    }
                }

                div { class: "dossier-profile__physical",
                    h3 { class: "dossier-field__label", {t!("profile-physical")} }
                    div { class: "dossier-profile__physical-row",
                        for (idx, text) in physical.into_iter().enumerate() {
                            span { class: "dossier-profile__physical-value", "{text}" }
                            if idx < last {
                                span { class: "dossier-profile__divider", "|" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn InfoField(label: String, value: String) -> Element {
    rsx! {
        div { class: "dossier-field",
            h3 { class: "dossier-field__label", "{label}" }
            p { class: "dossier-field__value", "{value}" }
        }
    }
}

fn info_label(kind: InfoKind) -> String {
    match kind {
        InfoKind::Birthday => t!("profile-birthday"),
        InfoKind::Birthplace => t!("profile-birthplace"),
        InfoKind::Position => t!("profile-position"),
        InfoKind::Candidate => t!("profile-candidate"),
    }
}

fn physical_label(kind: PhysicalKind, value: &str) -> String {
    match kind {
        PhysicalKind::Height => t!("profile-height", value = value),
        PhysicalKind::Weight => t!("profile-weight", value = value),
        PhysicalKind::Index => t!("profile-index", value = value),
    }
}
