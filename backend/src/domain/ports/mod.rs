//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod item_generator;
mod user_registration;
mod user_repository;
mod users_query;

#[cfg(test)]
pub use item_generator::MockItemGenerator;
pub use item_generator::{FixtureItemGenerator, ItemGenerator};
#[cfg(test)]
pub use user_registration::MockUserRegistration;
pub use user_registration::{
    FixtureUserRegistration, RegisterResult, RegistrationRequest, UserRegistration,
};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::{FixtureUsersQuery, UsersQuery};
