use super::{FieldUpdate, User};
use crate::response::FetchError;
use std::rc::Rc;
use yew::Reducible;

/// Shown to the viewer when the initial load fails, whatever the cause.
pub static FETCH_FAILED_MESSAGE: &str = "Failed to fetch users. Please try again later.";

/// Everything the user list view owns.
///
/// The list is populated once by the initial load and afterwards only changes
/// through the local operations below; nothing is written back to the source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserList {
	pub users: Vec<User>,
	/// Buffer behind the "add" form.
	pub draft: User,
	/// Present exactly while the edit modal is open.
	pub editing: Option<User>,
	pub error: Option<String>,
	pub loading: bool,
}

impl UserList {
	/// State of a freshly mounted view, waiting on the initial load.
	pub fn loading() -> Self {
		Self {
			loading: true,
			..Default::default()
		}
	}

	pub fn apply_fetch(&mut self, result: Result<Vec<User>, FetchError>) {
		match result {
			Ok(users) => {
				self.users = users;
				self.error = None;
			}
			Err(_) => {
				self.users.clear();
				self.error = Some(FETCH_FAILED_MESSAGE.to_owned());
			}
		}
		self.loading = false;
	}

	/// Commits the draft as a new entry. Does nothing if a required field is empty.
	///
	/// The new id is `len + 1`, which can collide with an existing id once
	/// entries have been deleted.
	pub fn add_user(&mut self) {
		if !self.draft.has_required_fields() {
			return;
		}
		let mut user = std::mem::take(&mut self.draft);
		user.id = Some(self.users.len() + 1);
		log::debug!(target: "users", "added user {:?}", user.id);
		self.users.push(user);
	}

	/// Writes the edit buffer over the entry with the same id and closes the edit flow.
	pub fn edit_user(&mut self) {
		let Some(edited) = self.editing.take() else {
			return;
		};
		for user in self.users.iter_mut().filter(|user| user.id == edited.id) {
			*user = edited.clone();
		}
		log::debug!(target: "users", "saved user {:?}", edited.id);
	}

	pub fn delete_user(&mut self, id: Option<usize>) {
		self.users.retain(|user| user.id != id);
		log::debug!(target: "users", "deleted user {id:?}");
	}

	pub fn begin_edit(&mut self, user: User) {
		self.editing = Some(user);
	}

	pub fn cancel_edit(&mut self) {
		self.editing = None;
	}

	pub fn update_draft(&mut self, update: FieldUpdate) {
		self.draft.apply(update);
	}

	pub fn update_editing(&mut self, update: FieldUpdate) {
		if let Some(editing) = &mut self.editing {
			editing.apply(update);
		}
	}

	pub fn is_editing(&self) -> bool {
		self.editing.is_some()
	}
}

#[derive(Debug)]
pub enum Action {
	Loaded(Result<Vec<User>, FetchError>),
	UpdateDraft(FieldUpdate),
	AddUser,
	BeginEdit(User),
	UpdateEditing(FieldUpdate),
	SaveEdit,
	CancelEdit,
	DeleteUser(Option<usize>),
}

impl Reducible for UserList {
	type Action = Action;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		// Nothing but the load result may touch the list until it has settled.
		if self.loading && !matches!(action, Action::Loaded(_)) {
			return self;
		}
		let mut next = (*self).clone();
		match action {
			Action::Loaded(result) => next.apply_fetch(result),
			Action::UpdateDraft(update) => next.update_draft(update),
			Action::AddUser => next.add_user(),
			Action::BeginEdit(user) => next.begin_edit(user),
			Action::UpdateEditing(update) => next.update_editing(update),
			Action::SaveEdit => next.edit_user(),
			Action::CancelEdit => next.cancel_edit(),
			Action::DeleteUser(id) => next.delete_user(id),
		}
		Rc::new(next)
	}
}
