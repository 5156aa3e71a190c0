//! Browser console plumbing: `log` backend and panic hook.

use log::{Level, LevelFilter, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = format!("[{}] {}: {}", record.level(), record.target(), record.args());
        emit(record.level(), &msg);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, msg: &str) {
    let value = wasm_bindgen::JsValue::from_str(msg);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

// Native builds (tests) have no console to write to.
#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, _msg: &str) {}

/// Install the console logger and panic hook at `default` level.
/// Once installed, later calls leave the level alone.
pub fn init(default: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        panic_hook_setup();
        log::set_max_level(default);
    }
}

/// Install if needed, then set the level.
pub fn set_level(level: LevelFilter) {
    init(level);
    log::set_max_level(level);
}

/// Parse a level name such as `"debug"`; unknown names yield `None`.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.parse().ok()
}

fn panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Sketchpad WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
