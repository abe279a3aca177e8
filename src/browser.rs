//! Browser Capabilities
//!
//! Window-backed implementations of what the sync layer needs injected:
//! the delete confirmation, the endpoint config and a console logger.

use wasm_bindgen::JsCast;
use todo_sync::config::DEFAULT_ENDPOINT;
use todo_sync::{ClientConfig, Confirm, SyncError, ToggleStrategy};

/// Build-time endpoint, e.g. `TODO_GRAPHQL_ENDPOINT=https://... trunk build`
const BUILD_ENDPOINT: Option<&str> = option_env!("TODO_GRAPHQL_ENDPOINT");

/// `window.confirm`, blocking until the user answers
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}

/// Resolve the client config: `<meta name="graphql-endpoint">` first, then the
/// build-time value, then the default local endpoint.
pub fn load_config() -> Result<ClientConfig, SyncError> {
    let endpoint = meta_content("graphql-endpoint")
        .or_else(|| BUILD_ENDPOINT.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let strategy = match meta_content("todo-toggle-strategy").as_deref() {
        Some("untouched") => ToggleStrategy::Untouched,
        _ => ToggleStrategy::MergeEntity,
    };

    Ok(ClientConfig::new(endpoint)?.with_toggle_strategy(strategy))
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    let content = meta.content();
    if content.trim().is_empty() {
        None
    } else {
        Some(content)
    }
}

// ========================
// Console Logger
// ========================

struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}", record.level(), record.args());
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line.into()),
            log::Level::Warn => web_sys::console::warn_1(&line.into()),
            log::Level::Info => web_sys::console::info_1(&line.into()),
            _ => web_sys::console::log_1(&line.into()),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Route `log` records to the browser console
pub fn init_logging(level: log::LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
