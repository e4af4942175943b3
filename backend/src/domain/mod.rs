//! Domain primitives, services and ports.
//!
//! Public surface:
//! - [`User`], [`Inventory`] and their validated value types.
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failures.
//! - [`UserRegistrationService`] and [`UsersQueryService`]: the use cases
//!   behind the driving ports in [`ports`].

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
mod user_registration_service;
mod users_query_service;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::TraceId;
pub use self::user::{
    Inventory, InventoryId, ItemCount, Level, MAX_ITEM_COUNT, NICKNAME_MAX, NewInventory, NewUser,
    Nickname, User, UserValidationError,
};
pub use self::user_registration_service::UserRegistrationService;
pub use self::users_query_service::UsersQueryService;
