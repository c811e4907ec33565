//! Localization of the UI chrome for `phenoview-ui`.
//!
//! Navigation, headings, buttons and placeholders are looked up through
//! `i18n-embed` + `fluent`, with the `.ftl` files embedded by `rust-embed` and
//! keys checked at compile time by `i18n-embed-fl`. The analysis report and the
//! processing status texts are domain output and stay in Spanish.
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   es-ES/phenoview-ui.ftl   (fallback/reference)
//!   en-US/phenoview-ui.ftl
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let home_label = t!("nav-home");
//! ```
//!
//! Desktop builds ask the OS for preferred languages; web builds read
//! `navigator.languages`. Assets are always embedded on wasm (`debug-embed`).
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation lookup through the shared loader.
///
/// ```ignore
/// t!("nav-home")
/// t!("chart-samples", count = 24)
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; also the FTL file name in every locale folder.
const DOMAIN: &str = "phenoview-ui";

pub const FALLBACK_LANGUAGE: &str = "es-ES";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE.parse().unwrap_or_default();
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load localization bundles (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(%err, "language selection failed; using fallback");
        }
    });
}

/// Switch language at runtime. Tags that do not parse are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Embedded language tags, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
