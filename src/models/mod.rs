pub mod fact;
pub mod user;

pub use fact::Fact;
pub use user::{AuthenticatedUser, User, UserData};
