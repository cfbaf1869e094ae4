use crate::data::User;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct UserTableProps {
	pub users: Vec<User>,
	pub on_edit: Callback<User>,
	pub on_delete: Callback<Option<usize>>,
}

#[function_component]
pub fn UserTable(UserTableProps { users, on_edit, on_delete }: &UserTableProps) -> Html {
	if users.is_empty() {
		return html! {
			<p class="has-text-centered mt-5">{"No users found."}</p>
		};
	}
	html! {
		<div class="table-container box p-0">
			<table class="table is-fullwidth is-hoverable">
				<thead>
					<tr>
						<th>{"Name"}</th>
						<th>{"Username"}</th>
						<th>{"Age"}</th>
						<th>{"Status"}</th>
						<th>{"Founder"}</th>
						<th class="has-text-right">{"Actions"}</th>
					</tr>
				</thead>
				<tbody>
					{users.iter().enumerate().map(|(idx, user)| {
						let edit = on_edit.reform({
							let user = user.clone();
							move |_: MouseEvent| user.clone()
						});
						let delete = on_delete.reform({
							let id = user.id;
							move |_: MouseEvent| id
						});
						// ids are not unique after local adds, so rows are keyed by position
						html! {
							<tr key={idx}>
								<td class="has-text-weight-medium">{user.full_name()}</td>
								<td>{user.username.clone()}</td>
								<td>{user.age}</td>
								<td>{user.status_label()}</td>
								<td>{user.founder_label()}</td>
								<td class="has-text-right">
									<button class="button is-small is-link is-light mr-2" onclick={edit}>{"Edit"}</button>
									<button class="button is-small is-danger is-light" onclick={delete}>{"Delete"}</button>
								</td>
							</tr>
						}
					}).collect::<Html>()}
				</tbody>
			</table>
		</div>
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{data::UserList, response::Response};
	use reqwest::StatusCode;
	use yew::ServerRenderer;

	async fn render(users: Vec<User>) -> String {
		ServerRenderer::<UserTable>::with_props(move || UserTableProps {
			users,
			on_edit: Callback::noop(),
			on_delete: Callback::noop(),
		})
		.hydratable(false)
		.render()
		.await
	}

	fn fetched_ada() -> UserList {
		let mut state = UserList::loading();
		state.apply_fetch(Response::<Vec<User>>::decode(
			StatusCode::OK,
			r#"[{"id":1,"first_name":"Ada","last_name":"Lovelace","username":"ada","age":30,"marital_status":"unmarried","is_employed":true,"is_founder":false}]"#.into(),
		));
		state
	}

	#[tokio::test]
	async fn renders_fetched_row() {
		let html = render(fetched_ada().users).await;
		assert!(html.contains("<table"));
		assert!(html.contains(">Ada Lovelace<"));
		assert!(html.contains(">ada<"));
		assert!(html.contains(">30<"));
		assert!(html.contains(">Employed, unmarried<"));
		assert!(html.contains(">No<"));
		assert!(html.contains(">Edit<"));
		assert!(html.contains(">Delete<"));
		assert!(!html.contains("No users found."));
	}

	#[tokio::test]
	async fn deleting_last_row_shows_empty_state() {
		let mut state = fetched_ada();
		state.delete_user(Some(1));
		let html = render(state.users).await;
		assert!(html.contains("No users found."));
		assert!(!html.contains("<table"));
	}
}
