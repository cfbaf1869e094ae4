use crate::{
	data::{FieldUpdate, MaritalStatus, User},
	util::web_ext::{CallbackOptExt, InputExt},
};
use std::str::FromStr;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct UserFieldsProps {
	pub user: User,
	pub on_change: Callback<FieldUpdate>,
	/// Show placeholders instead of labels (the compact "add" row).
	#[prop_or_default]
	pub compact: bool,
}

/// Every editable field of a user record, shared by the add form and the edit modal.
#[function_component]
pub fn UserFields(UserFieldsProps { user, on_change, compact }: &UserFieldsProps) -> Html {
	let text_field = |label: &'static str, value: &String, update: fn(String) -> FieldUpdate| {
		let oninput = on_change.reform_some(move |evt: InputEvent| evt.input_value().map(update));
		let placeholder = compact.then_some(label);
		html! {
			<div class="field">
				if !*compact {
					<label class="label">{label}</label>
				}
				<div class="control">
					<input class="input" type="text" {placeholder} value={value.clone()} {oninput} />
				</div>
			</div>
		}
	};

	let set_age = on_change.reform_some(|evt: InputEvent| evt.input_value().map(|value| FieldUpdate::age_from_input(&value)));
	let set_status = on_change.reform_some(|evt: Event| {
		let value = evt.select_value()?;
		MaritalStatus::from_str(&value).ok().map(FieldUpdate::MaritalStatus)
	});
	let set_employed = on_change.reform_some(|evt: Event| evt.input_checked().map(FieldUpdate::Employed));
	let set_founder = on_change.reform_some(|evt: Event| evt.input_checked().map(FieldUpdate::Founder));

	html! {<>
		{text_field("First Name", &user.first_name, FieldUpdate::FirstName)}
		{text_field("Last Name", &user.last_name, FieldUpdate::LastName)}
		{text_field("Username", &user.username, FieldUpdate::Username)}
		<div class="field">
			if !*compact {
				<label class="label">{"Age"}</label>
			}
			<div class="control">
				<input class="input" type="number" placeholder={compact.then_some("Age")} value={user.age.to_string()} oninput={set_age} />
			</div>
		</div>
		<div class="field">
			<div class="control">
				<div class="select">
					<select onchange={set_status}>
						{MaritalStatus::all().into_iter().map(|status| html! {
							<option value={status.value()} selected={status == user.marital_status}>{status.label()}</option>
						}).collect::<Html>()}
					</select>
				</div>
			</div>
		</div>
		<div class="field">
			<label class="checkbox">
				<input type="checkbox" checked={user.is_employed} onchange={set_employed} />
				<span class="ml-2">{"Employed"}</span>
			</label>
		</div>
		<div class="field">
			<label class="checkbox">
				<input type="checkbox" checked={user.is_founder} onchange={set_founder} />
				<span class="ml-2">{"Founder"}</span>
			</label>
		</div>
	</>}
}

#[derive(Clone, PartialEq, Properties)]
pub struct AddUserFormProps {
	pub draft: User,
	pub on_change: Callback<FieldUpdate>,
	pub on_submit: Callback<()>,
}

#[function_component]
pub fn AddUserForm(AddUserFormProps { draft, on_change, on_submit }: &AddUserFormProps) -> Html {
	let onclick = on_submit.reform(|_: MouseEvent| ());
	html! {
		<div class="box has-background-light mb-5">
			<h2 class="title is-4">{"Add New User"}</h2>
			<div class="is-flex is-flex-wrap-wrap is-align-items-center" style="gap: 1rem;">
				<UserFields user={draft.clone()} on_change={on_change.clone()} compact=true />
				<button class="button is-link" {onclick}>{"Add User"}</button>
			</div>
		</div>
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use yew::ServerRenderer;

	#[tokio::test]
	async fn add_form_uses_placeholders() {
		let html = ServerRenderer::<AddUserForm>::with_props(|| AddUserFormProps {
			draft: User::default(),
			on_change: Callback::noop(),
			on_submit: Callback::noop(),
		})
		.hydratable(false)
		.render()
		.await;
		assert!(html.contains("Add New User"));
		assert!(html.contains(r#"placeholder="First Name""#));
		assert!(html.contains(r#"placeholder="Age""#));
		assert!(html.contains(r#"type="checkbox""#));
		assert!(html.contains(">Add User<"));
		assert!(!html.contains(r#"class="label""#));
	}
}
