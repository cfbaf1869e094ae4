pub mod edit_modal;
pub mod user_form;
pub mod user_list;
pub mod user_table;

pub use user_list::UserListView;
