//! `QR_DEBUG` switch and the stderr subscriber behind it

use std::sync::OnceLock;

use tracing::level_filters::LevelFilter;

static DEBUG_LEVEL: OnceLock<LevelFilter> = OnceLock::new();

fn parse_debug_level(raw: Option<&str>) -> LevelFilter {
    match raw.map(|v| v.trim().to_ascii_lowercase()) {
        None => LevelFilter::OFF,
        Some(v) if v == "trace" => LevelFilter::TRACE,
        Some(v) if v == "0" || v == "off" => LevelFilter::OFF,
        Some(_) => LevelFilter::DEBUG,
    }
}

/// Level requested through `QR_DEBUG` (unset: off, `trace`: trace, anything else: debug)
pub fn debug_level() -> LevelFilter {
    *DEBUG_LEVEL.get_or_init(|| parse_debug_level(std::env::var("QR_DEBUG").ok().as_deref()))
}

/// Whether `QR_DEBUG` turned logging on
pub(crate) fn debug_enabled() -> bool {
    debug_level() != LevelFilter::OFF
}

/// Install a stderr `tracing_subscriber` when `QR_DEBUG` asks for it.
/// Safe to call more than once; later calls are ignored.
pub fn init_logger() {
    if !debug_enabled() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_max_level(debug_level())
        .with_writer(std::io::stderr)
        .try_init();
}
