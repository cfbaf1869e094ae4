use super::user_form::UserFields;
use crate::data::{FieldUpdate, User};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct EditModalProps {
	/// The record being edited; the modal is closed while this is absent.
	pub editing: Option<User>,
	pub on_change: Callback<FieldUpdate>,
	pub on_save: Callback<()>,
	pub on_cancel: Callback<()>,
}

#[function_component]
pub fn EditModal(EditModalProps { editing, on_change, on_save, on_cancel }: &EditModalProps) -> Html {
	let Some(user) = editing else {
		return html! {
			<div class={"modal"} id="users::EditModal" />
		};
	};
	let save = on_save.reform(|_: MouseEvent| ());
	let cancel = on_cancel.reform(|_: MouseEvent| ());
	html! {
		<div class={"modal is-active"} id="users::EditModal">
			<div class="modal-background"></div>
			<div class="modal-content">
				<div class="box">
					<h2 class="title is-5">{"Edit User"}</h2>
					<UserFields user={user.clone()} on_change={on_change.clone()} />
					<div class="field is-grouped is-grouped-right">
						<div class="control"><button class="button is-link" onclick={save}>{"Save"}</button></div>
						<div class="control"><button class="button is-light" onclick={cancel}>{"Cancel"}</button></div>
					</div>
				</div>
			</div>
		</div>
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use yew::ServerRenderer;

	async fn render(editing: Option<User>) -> String {
		ServerRenderer::<EditModal>::with_props(move || EditModalProps {
			editing,
			on_change: Callback::noop(),
			on_save: Callback::noop(),
			on_cancel: Callback::noop(),
		})
		.hydratable(false)
		.render()
		.await
	}

	#[tokio::test]
	async fn closed_modal_is_inactive() {
		let html = render(None).await;
		assert!(!html.contains("is-active"));
		assert!(!html.contains("Edit User"));
	}

	#[tokio::test]
	async fn open_modal_shows_fields_and_actions() {
		let html = render(Some(User {
			id: Some(1),
			first_name: "Ada".into(),
			..Default::default()
		}))
		.await;
		assert!(html.contains("modal is-active"));
		assert!(html.contains("Edit User"));
		for label in ["First Name", "Last Name", "Username", "Age", "Employed", "Founder", "Unmarried", "Married"] {
			assert!(html.contains(label), "missing {label}");
		}
		assert!(html.contains(">Save<"));
		assert!(html.contains(">Cancel<"));
	}
}
