//! Logging setup shared by the CLI and the WASM module.

/// Environment variable that turns on debug logging in the CLI.
pub const DEBUG_ENV: &str = "FICHA_DEBUG";

/// Does `value` (the contents of [`DEBUG_ENV`]) ask for debug output?
///
/// Anything but an empty string, `0`, `false` or `off` counts as yes.
#[must_use]
pub fn debug_requested(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None | Some("") => false,
        Some(v) => !matches!(v.to_ascii_lowercase().as_str(), "0" | "false" | "off"),
    }
}

/// Initialize logging.
///
/// - **Native:** `env_logger` at `Debug` or `Info`; `RUST_LOG`, when set,
///   replaces those defaults.
/// - **WASM:** `console_log` at `Debug` or `Info`.
///
/// Calling it twice is harmless; the second call logs a warning and keeps
/// the first logger.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled { log::Level::Debug } else { log::Level::Info };

        match console_log::init_with_level(level) {
            Ok(()) => log::info!("ficha (wasm) logging at {level:?}"),
            Err(e) => {
                // no logger means no log::warn!, so go straight to the console
                let msg = format!("ficha: console logging unavailable: {e}");
                web_sys::console::error_1(&msg.into());
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use log::LevelFilter;

        let level = if debug_enabled { LevelFilter::Debug } else { LevelFilter::Info };

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        if let Ok(spec) = std::env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }

        match builder.try_init() {
            Ok(()) => log::debug!("ficha logging at {level:?}"),
            Err(e) => log::warn!("logger already initialized: {e}"),
        }
    }
}
