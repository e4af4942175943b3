//! Registration service implementing the [`UserRegistration`] driving port.
//!
//! The existence check before inserting is only a fast path. Two concurrent
//! registrations for the same nickname can both pass it; the store's primary
//! key then rejects the loser, which is reported as a duplicate.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{
    ItemGenerator, RegisterResult, RegistrationRequest, UserPersistenceError, UserRegistration,
    UserRepository,
};
use crate::domain::{ItemCount, Level, NewInventory, NewUser, Nickname, TraceId};

/// Validates registrations and persists the new user with a generated
/// inventory.
pub struct UserRegistrationService<R, G: ?Sized> {
    repository: Arc<R>,
    items: Arc<G>,
}

impl<R, G: ?Sized> UserRegistrationService<R, G> {
    pub fn new(repository: Arc<R>, items: Arc<G>) -> Self {
        Self { repository, items }
    }
}

fn log_failure(stage: &'static str, name: &Nickname, cause: &UserPersistenceError) {
    let trace_id = TraceId::current().map(|id| id.to_string());
    error!(
        stage,
        nickname = %name,
        trace_id = trace_id.as_deref().unwrap_or("none"),
        error = %cause,
        "user registration failed"
    );
}

#[async_trait]
impl<R, G> UserRegistration for UserRegistrationService<R, G>
where
    R: UserRepository,
    G: ItemGenerator + ?Sized,
{
    async fn register(&self, request: RegistrationRequest) -> RegisterResult {
        let Ok(name) = Nickname::new(request.name) else {
            return RegisterResult::InvalidData;
        };
        let level = Level::new(request.level);
        let count = ItemCount::clamped(request.item_count);

        match self.repository.find_by_name(&name).await {
            Ok(Some(_)) => return RegisterResult::DuplicateName,
            Ok(None) => {}
            Err(cause) => {
                log_failure("lookup", &name, &cause);
                return RegisterResult::InternalFailure;
            }
        }

        let inventory = NewInventory::new(self.items.generate(count));
        let new_user = NewUser::new(name, level, Some(inventory));

        match self.repository.insert_user_with_inventory(&new_user).await {
            Ok(()) => {
                info!(
                    nickname = %new_user.name(),
                    level = level.value(),
                    items = count.get(),
                    "user registered"
                );
                RegisterResult::Success
            }
            Err(UserPersistenceError::DuplicateName { .. }) => RegisterResult::DuplicateName,
            Err(cause) => {
                log_failure("insert", new_user.name(), &cause);
                RegisterResult::InternalFailure
            }
        }
    }
}
