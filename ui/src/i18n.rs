//! Internationalization (i18n) support for `dossier-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/dossier-ui.ftl   (fallback/reference)
//!   uz-UZ/dossier-ui.ftl   (Uzbek, Cyrillic script)
//! ```
//!
//! Only UI chrome is translated. Labels inside the static datasets and the
//! fetched records are content and are shown as given.
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let title = t!("knowledge-title");
//! let summary = t!("summary-overall", overall = "A");
//! ```
//!
//! Platform notes:
//! - Desktop: uses `DesktopLanguageRequester` (OS locale list).
//! - Web/WASM: uses `WebLanguageRequester` (`navigator.languages`).
//! - Assets are always embedded on WASM (`debug-embed` in the wasm dependency section).
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::warn;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("trend-title")
///     t!("profile-height", value = "180 sm")
///
/// Expands to `fl!(&*LOADER, ...)` so every lookup goes through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "dossier-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(error = %err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Code of the language the loader currently renders, e.g. `uz-UZ` when the
/// OS or browser asked for Uzbek. Seeds the locale switcher and the global
/// language signal.
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(|lang| lang.to_string())
        .unwrap_or_else(|| LOADER.fallback_language().to_string())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Subscribe the calling component to the global language code, if the
/// platform provides one through context, and return it.
///
/// Components that call `t!` directly read this so a locale switch re-renders
/// them in place instead of remounting the tree.
pub fn use_language_marker() -> String {
    let lang_code = dioxus::prelude::try_use_context::<dioxus::prelude::Signal<String>>();
    lang_code.map(|code| code()).unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn fallback_and_uzbek_are_embedded() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "uz-UZ"));
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let s = fl!(&*LOADER, "trend-title");
        assert!(!s.is_empty());
        assert_ne!(s, "trend-title");
    }

    #[test]
    fn arguments_are_interpolated() {
        init();
        let s = fl!(&*LOADER, "summary-overall", overall = "Yaxshi");
        assert!(s.contains("Yaxshi"));
    }

    #[test]
    fn current_language_is_an_embedded_locale() {
        init();
        let current = current_language();
        assert!(
            available_languages().contains(&current),
            "{current} is not embedded"
        );
    }

    #[test]
    fn dynamic_language_switch_ignores_unknown_tags() {
        init();
        let before = fl!(&*LOADER, "knowledge-title");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "knowledge-title");
        assert_eq!(before, after);
    }
}
