use log::LevelFilter;
use yew::AttrValue;

/// Read-only endpoint serving the initial user snapshot.
pub static USERS_ENDPOINT: &str = "https://mocki.io/v1/a6a0fb6b-a84a-4934-b3f2-5c92cc77c44e";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
	pub endpoint: AttrValue,
	pub log_level: LevelFilter,
}
impl Default for Config {
	fn default() -> Self {
		Self {
			endpoint: AttrValue::Static(USERS_ENDPOINT),
			log_level: LevelFilter::Info,
		}
	}
}
impl Config {
	pub fn with_endpoint(mut self, endpoint: impl Into<AttrValue>) -> Self {
		self.endpoint = endpoint.into();
		self
	}

	pub fn with_log_level(mut self, level: LevelFilter) -> Self {
		self.log_level = level;
		self
	}
}
