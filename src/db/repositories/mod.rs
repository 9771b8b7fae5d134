pub mod fact;
pub mod token;
pub mod user;
