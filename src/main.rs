use log::LevelFilter;
use user_portal::config::Config;

fn config() -> Config {
	let level = match cfg!(debug_assertions) {
		true => LevelFilter::Debug,
		false => LevelFilter::Info,
	};
	Config::default().with_log_level(level)
}

#[cfg(target_family = "wasm")]
fn main() {
	use user_portal::{App, AppProps};

	let config = config();
	if let Err(err) = user_portal::logging::init(&config) {
		web_sys::console::error_1(&format!("failed to install logger: {err:?}").into());
	}
	yew::Renderer::<App>::with_props(AppProps { config }).render();
}

#[cfg(not(target_family = "wasm"))]
fn main() -> anyhow::Result<()> {
	user_portal::logging::init(&config())?;
	log::error!(target: "app", "{} renders in a browser; build for wasm32 and serve it with `trunk serve`", env!("CARGO_PKG_NAME"));
	Ok(())
}
