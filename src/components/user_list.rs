use super::{edit_modal::EditModal, user_form::AddUserForm, user_table::UserTable};
use crate::{
	api::load_from_config,
	config::Config,
	data::{Action, FieldUpdate, User, UserList},
	hooks::use_mount_task,
};
use yew::prelude::*;

/// Fetches the user snapshot once on mount, then edits it purely in memory.
#[function_component]
pub fn UserListView() -> Html {
	let config = use_context::<Config>().unwrap_or_default();
	let state = use_reducer(UserList::loading);

	use_mount_task("users", {
		let dispatcher = state.dispatcher();
		move || async move {
			dispatcher.dispatch(load_from_config(&config).await);
		}
	});

	if state.loading {
		return html! {
			<div class="has-text-centered mt-6">{"Loading..."}</div>
		};
	}

	let update_draft = {
		let dispatcher = state.dispatcher();
		Callback::from(move |update: FieldUpdate| dispatcher.dispatch(Action::UpdateDraft(update)))
	};
	let add_user = {
		let dispatcher = state.dispatcher();
		Callback::from(move |_: ()| dispatcher.dispatch(Action::AddUser))
	};
	let begin_edit = {
		let dispatcher = state.dispatcher();
		Callback::from(move |user: User| dispatcher.dispatch(Action::BeginEdit(user)))
	};
	let delete_user = {
		let dispatcher = state.dispatcher();
		Callback::from(move |id: Option<usize>| dispatcher.dispatch(Action::DeleteUser(id)))
	};
	let update_editing = {
		let dispatcher = state.dispatcher();
		Callback::from(move |update: FieldUpdate| dispatcher.dispatch(Action::UpdateEditing(update)))
	};
	let save_edit = {
		let dispatcher = state.dispatcher();
		Callback::from(move |_: ()| dispatcher.dispatch(Action::SaveEdit))
	};
	let cancel_edit = {
		let dispatcher = state.dispatcher();
		Callback::from(move |_: ()| dispatcher.dispatch(Action::CancelEdit))
	};

	html! {
		<section class="section">
			<div class="container">
				<h1 class="title is-2 has-text-centered">{"User Portal"}</h1>
				<ErrorBanner message={state.error.clone().map(AttrValue::from)} />
				<AddUserForm draft={state.draft.clone()} on_change={update_draft} on_submit={add_user} />
				<UserTable users={state.users.clone()} on_edit={begin_edit} on_delete={delete_user} />
				<EditModal
					editing={state.editing.clone()}
					on_change={update_editing}
					on_save={save_edit}
					on_cancel={cancel_edit}
				/>
			</div>
		</section>
	}
}

#[derive(Clone, PartialEq, Default, Properties)]
pub struct ErrorBannerProps {
	#[prop_or_default]
	pub message: Option<AttrValue>,
}

#[function_component]
pub fn ErrorBanner(ErrorBannerProps { message }: &ErrorBannerProps) -> Html {
	let Some(message) = message else {
		return html! {};
	};
	html! {
		<div class="notification is-danger is-light has-text-centered">{message.clone()}</div>
	}
}
