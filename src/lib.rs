use yew::prelude::*;

pub mod api;
pub mod components;
pub mod config;
pub mod data;
pub mod hooks;
pub mod logging;
pub mod response;
pub mod util;

#[derive(Clone, PartialEq, Default, Properties)]
pub struct AppProps {
	#[prop_or_default]
	pub config: config::Config,
}

#[function_component]
pub fn App(AppProps { config }: &AppProps) -> Html {
	html! {
		<ContextProvider<config::Config> context={config.clone()}>
			<components::UserListView />
		</ContextProvider<config::Config>>
	}
}
