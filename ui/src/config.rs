//! Startup configuration.
//!
//! Everything environment-dependent is resolved here, once, and handed to
//! the loader explicitly; nothing else in the app inspects the host or the
//! build environment.

/// Where the catalog data comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DataSource {
    /// JSON asset compiled into the bundle; used when served locally.
    #[default]
    Bundled,
    /// Per-category JSON documents on the public static host.
    Remote,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub source: DataSource,
    /// Display-only banner announcing the Gemini preview design.
    pub show_preview_banner: bool,
}

impl AppConfig {
    /// Resolve configuration from the serving host and build-time flags.
    pub fn detect() -> Self {
        let hostname = web_sys::window()
            .and_then(|window| window.location().hostname().ok())
            .unwrap_or_default();
        let source = if hostname.is_empty() || hostname == "localhost" || hostname == "127.0.0.1" {
            DataSource::Bundled
        } else {
            DataSource::Remote
        };
        let show_preview_banner =
            matches!(option_env!("HINCH_GEMINI_PREVIEW"), Some("true") | Some("1"));
        Self {
            source,
            show_preview_banner,
        }
    }
}
