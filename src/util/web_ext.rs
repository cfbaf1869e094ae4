use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};

/// Reads form control state off the target of a DOM event.
pub trait InputExt {
	fn input_value(&self) -> Option<String>;
	fn input_checked(&self) -> Option<bool>;
	fn select_value(&self) -> Option<String>;
}

impl InputExt for web_sys::Event {
	fn input_value(&self) -> Option<String> {
		let element = self.target()?.dyn_into::<HtmlInputElement>().ok()?;
		Some(element.value())
	}

	fn input_checked(&self) -> Option<bool> {
		let element = self.target()?.dyn_into::<HtmlInputElement>().ok()?;
		Some(element.checked())
	}

	fn select_value(&self) -> Option<String> {
		let element = self.target()?.dyn_into::<HtmlSelectElement>().ok()?;
		Some(element.value())
	}
}

pub trait CallbackOptExt<IN> {
	/// Builds a callback that converts its input with `read` and only emits when that yields a value.
	fn reform_some<T, F>(&self, read: F) -> yew::Callback<T>
	where
		T: 'static,
		F: Fn(T) -> Option<IN> + 'static;
}

impl<IN: 'static> CallbackOptExt<IN> for yew::Callback<IN> {
	fn reform_some<T, F>(&self, read: F) -> yew::Callback<T>
	where
		T: 'static,
		F: Fn(T) -> Option<IN> + 'static,
	{
		let callback = self.clone();
		yew::Callback::from(move |value: T| {
			if let Some(value) = read(value) {
				callback.emit(value);
			}
		})
	}
}
