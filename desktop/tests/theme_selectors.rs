#![cfg(test)]
//! Selectors the shared dashboard components emit. If markup changes a class
//! name, update the theme and this list together.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    // Cards and section titles
    ".dossier-card",
    ".dossier-section__title",
    ".dossier-section__title--accent",
    ".dossier-section__subtitle",
    // Profile header
    ".dossier-profile",
    ".dossier-profile__image",
    ".dossier-profile__fields",
    ".dossier-profile__physical-row",
    ".dossier-field__label",
    ".dossier-field__value",
    // Bars
    ".dossier-bar",
    ".dossier-bar--tall",
    ".dossier-bar__fill",
    ".dossier-scores",
    ".dossier-score__value",
    ".dossier-quality__header",
    ".dossier-qualities__column",
    // Charts
    ".dossier-trend",
    ".dossier-radar",
    ".dossier-rings",
    ".dossier-ring__chart",
    ".dossier-ring__value",
    // Summary and load lifecycle
    ".dossier-summary__overall",
    ".dossier-status",
    ".dossier-status__error",
    ".dossier-spinner",
    "@keyframes dossier-spin",
    "@media (max-width: 720px)",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|selector| !THEME_CSS.contains(*selector))
        .collect();

    assert!(
        missing.is_empty(),
        "theme is missing selectors used by the dashboard: {missing:?}"
    );
}
