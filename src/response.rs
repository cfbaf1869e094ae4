use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

/// Anything that can go wrong while loading a remote resource.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
	#[error("invalid endpoint {0:?}: {1}")]
	InvalidEndpoint(String, url::ParseError),
	#[error("request failed: {0}")]
	Transport(String),
	#[error("unexpected response status {0}")]
	Status(StatusCode),
	#[error(transparent)]
	InvalidJson(#[from] InvalidJson),
}
impl From<reqwest::Error> for FetchError {
	fn from(err: reqwest::Error) -> Self {
		Self::Transport(err.to_string())
	}
}

pub struct Response<T> {
	builder: RequestBuilder,
	marker: std::marker::PhantomData<T>,
}
impl<T> std::fmt::Debug for Response<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.builder.fmt(f)
	}
}
impl<T> Response<T>
where
	T: DeserializeOwned,
{
	pub fn from(builder: RequestBuilder) -> Self {
		Self {
			builder,
			marker: Default::default(),
		}
	}

	pub async fn send(self) -> Result<T, FetchError> {
		let response: reqwest::Response = self.builder.send().await?;
		let status = response.status();
		let text = response.text().await?;
		Self::decode(status, text)
	}

	/// Decodes a settled response, rejecting any non-success status before looking at the body.
	pub fn decode(status: StatusCode, text: String) -> Result<T, FetchError> {
		if !status.is_success() {
			return Err(FetchError::Status(status));
		}
		match serde_json::from_str(&text) {
			Ok(data) => Ok(data),
			Err(err) => Err(InvalidJson(text, err).into()),
		}
	}
}

#[derive(thiserror::Error, Debug)]
pub struct InvalidJson(pub String, pub serde_json::Error);
impl std::fmt::Display for InvalidJson {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Invalid json: {:?}\nError: {:?}", self.0, self.1)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use rstest::rstest;

	type Numbers = Response<Vec<u32>>;

	#[test]
	fn decodes_success_body() {
		let data = Numbers::decode(StatusCode::OK, "[1, 2, 3]".into()).unwrap();
		assert_eq!(data, vec![1, 2, 3]);
	}

	#[rstest]
	#[case(StatusCode::NOT_FOUND)]
	#[case(StatusCode::INTERNAL_SERVER_ERROR)]
	#[case(StatusCode::SERVICE_UNAVAILABLE)]
	fn rejects_error_status_even_with_valid_body(#[case] status: StatusCode) {
		let err = Numbers::decode(status, "[1]".into()).unwrap_err();
		assert!(matches!(err, FetchError::Status(code) if code == status));
	}

	#[test]
	fn keeps_body_of_invalid_json() {
		let err = Numbers::decode(StatusCode::OK, "<html>".into()).unwrap_err();
		match err {
			FetchError::InvalidJson(InvalidJson(body, _)) => assert_eq!(body, "<html>"),
			other => panic!("expected invalid json, got {other:?}"),
		}
	}
}
