mod user;
pub use user::*;

mod user_list;
pub use user_list::*;
