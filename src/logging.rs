use crate::config::Config;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Installs the global logger for the current platform.
pub fn init(config: &Config) -> anyhow::Result<()> {
	#[cfg(target_family = "wasm")]
	{
		log::set_boxed_logger(Box::new(ConsoleLogger { level: config.log_level }))?;
		log::set_max_level(config.log_level);
	}
	#[cfg(not(target_family = "wasm"))]
	{
		simplelog::TermLogger::init(
			config.log_level,
			simplelog::Config::default(),
			simplelog::TerminalMode::Mixed,
			simplelog::ColorChoice::Auto,
		)?;
	}
	Ok(())
}

/// Forwards records to the browser console, prefixed with their target.
#[derive(Debug)]
pub struct ConsoleLogger {
	level: LevelFilter,
}
impl ConsoleLogger {
	pub fn format(record: &Record) -> String {
		format!("[{}] {}", record.target(), record.args())
	}
}
impl Log for ConsoleLogger {
	fn enabled(&self, metadata: &Metadata) -> bool {
		metadata.level() <= self.level
	}

	fn log(&self, record: &Record) {
		if !self.enabled(record.metadata()) {
			return;
		}
		let line = wasm_bindgen::JsValue::from_str(&Self::format(record));
		match record.level() {
			Level::Error => web_sys::console::error_1(&line),
			Level::Warn => web_sys::console::warn_1(&line),
			Level::Info => web_sys::console::info_1(&line),
			Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
		}
	}

	fn flush(&self) {}
}
