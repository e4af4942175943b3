//! Driving port for registering users.

use async_trait::async_trait;

/// Raw registration input as received from a client.
///
/// `name` is validated by the service; `item_count` may be any value and is
/// clamped before items are generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub name: String,
    pub level: u32,
    pub item_count: i64,
}

impl RegistrationRequest {
    pub fn new(name: impl Into<String>, level: u32, item_count: i64) -> Self {
        Self {
            name: name.into(),
            level,
            item_count,
        }
    }
}

/// Outcome of a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterResult {
    /// The input failed validation; nothing was written.
    InvalidData,
    /// The nickname is taken; nothing was written.
    DuplicateName,
    /// The user and its inventory were committed.
    Success,
    /// Storage failed; the cause was logged and nothing was written.
    InternalFailure,
}

/// Use-case port for creating users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRegistration: Send + Sync {
    async fn register(&self, request: RegistrationRequest) -> RegisterResult;
}

/// Registration stub that accepts every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRegistration;

#[async_trait]
impl UserRegistration for FixtureUserRegistration {
    async fn register(&self, _request: RegistrationRequest) -> RegisterResult {
        RegisterResult::Success
    }
}
