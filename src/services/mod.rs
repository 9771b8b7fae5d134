pub mod token;
pub use token::TokenSigner;

pub mod auth_service;
pub mod auth_service_impl;
pub use auth_service::{AuthError, AuthService, LoginResult};
pub use auth_service_impl::InMemoryAuthService;

pub mod fact_service;
pub mod fact_service_impl;
pub use fact_service::{FactError, FactService};
pub use fact_service_impl::InMemoryFactService;
