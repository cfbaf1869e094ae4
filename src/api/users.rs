use crate::{
	config::Config,
	data::{Action, User},
	response::{FetchError, Response},
};
use async_trait::async_trait;
use url::Url;

/// Where the initial list of users comes from.
#[async_trait(?Send)]
pub trait UserSource {
	async fn fetch_users(&self) -> Result<Vec<User>, FetchError>;
}

/// Issues a single unauthenticated GET against the configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpUserSource {
	client: reqwest::Client,
	endpoint: Url,
}
impl HttpUserSource {
	pub fn new(config: &Config) -> Result<Self, FetchError> {
		let endpoint = Url::parse(&config.endpoint)
			.map_err(|err| FetchError::InvalidEndpoint(config.endpoint.to_string(), err))?;
		Ok(Self {
			client: reqwest::Client::new(),
			endpoint,
		})
	}

	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}
}

#[async_trait(?Send)]
impl UserSource for HttpUserSource {
	async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
		let builder = self.client.get(self.endpoint.clone());
		Response::<Vec<User>>::from(builder).send().await
	}
}

/// Runs the initial load and packages its outcome for the view's reducer.
pub async fn load_users<S>(source: &S) -> Action
where
	S: UserSource + ?Sized,
{
	let result = source.fetch_users().await;
	match &result {
		Ok(users) => log::info!(target: "users", "fetched {} users", users.len()),
		Err(err) => log::error!(target: "users", "Fetch error: {err}"),
	}
	Action::Loaded(result)
}

/// Builds the HTTP source from config and loads through it.
/// A bad endpoint settles the load the same way a failed request does.
pub async fn load_from_config(config: &Config) -> Action {
	match HttpUserSource::new(config) {
		Ok(source) => load_users(&source).await,
		Err(err) => {
			log::error!(target: "users", "Fetch error: {err}");
			Action::Loaded(Err(err))
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::data::{UserList, FETCH_FAILED_MESSAGE};
	use futures::executor::block_on;
	use reqwest::StatusCode;
	use std::{cell::Cell, rc::Rc};
	use yew::Reducible;

	struct Stub {
		calls: Cell<usize>,
		respond: fn() -> Result<Vec<User>, FetchError>,
	}
	impl Stub {
		fn new(respond: fn() -> Result<Vec<User>, FetchError>) -> Self {
			Self {
				calls: Cell::new(0),
				respond,
			}
		}
	}
	#[async_trait(?Send)]
	impl UserSource for Stub {
		async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
			self.calls.set(self.calls.get() + 1);
			(self.respond)()
		}
	}

	fn ada_payload() -> Result<Vec<User>, FetchError> {
		Response::<Vec<User>>::decode(
			StatusCode::OK,
			r#"[{"id":1,"first_name":"Ada","last_name":"Lovelace","username":"ada","age":30,"marital_status":"unmarried","is_employed":true,"is_founder":false}]"#.into(),
		)
	}

	fn settle(source: &Stub) -> Rc<UserList> {
		let action = block_on(load_users(source));
		Rc::new(UserList::loading()).reduce(action)
	}

	#[test]
	fn load_success_populates_list() {
		let source = Stub::new(ada_payload);
		let state = settle(&source);
		assert_eq!(source.calls.get(), 1);
		assert!(!state.loading);
		assert_eq!(state.error, None);
		assert_eq!(state.users.len(), 1);
		let ada = &state.users[0];
		assert_eq!(ada.full_name(), "Ada Lovelace");
		assert_eq!(ada.username, "ada");
		assert_eq!(ada.age, 30);
		assert_eq!(ada.status_label(), "Employed, unmarried");
		assert_eq!(ada.founder_label(), "No");
	}

	#[test]
	fn load_network_failure() {
		let source = Stub::new(|| Err(FetchError::Transport("dns lookup failed".into())));
		let state = settle(&source);
		assert!(state.users.is_empty());
		assert_eq!(state.error.as_deref(), Some(FETCH_FAILED_MESSAGE));
		assert!(!state.loading);
	}

	#[test]
	fn load_server_error() {
		let source = Stub::new(|| Response::<Vec<User>>::decode(StatusCode::INTERNAL_SERVER_ERROR, "[]".into()));
		let state = settle(&source);
		assert!(state.users.is_empty());
		assert_eq!(state.error.as_deref(), Some(FETCH_FAILED_MESSAGE));
		assert!(!state.loading);
	}

	#[test]
	fn http_source_parses_endpoint() {
		let source = HttpUserSource::new(&Config::default()).unwrap();
		assert_eq!(source.endpoint().host_str(), Some("mocki.io"));
	}

	#[test]
	fn bad_endpoint_settles_as_failure() {
		let config = Config::default().with_endpoint("not a url");
		let state = Rc::new(UserList::loading()).reduce(block_on(load_from_config(&config)));
		assert_eq!(state.error.as_deref(), Some(FETCH_FAILED_MESSAGE));
		assert!(!state.loading);
	}
}
