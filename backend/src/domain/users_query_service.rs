//! Query service implementing the [`UsersQuery`] driving port.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersQuery};
use crate::domain::{Error, Nickname, User};

/// Reads users through a [`UserRepository`].
#[derive(Clone)]
pub struct UsersQueryService<R> {
    repository: Arc<R>,
}

impl<R> UsersQueryService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        other => Error::internal(format!("user repository error: {other}")),
    }
}

#[async_trait]
impl<R> UsersQuery for UsersQueryService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository
            .find_all()
            .await
            .map_err(map_persistence_error)
    }

    async fn get_user(&self, name: &str) -> Result<Option<User>, Error> {
        // Names that could never be registered cannot be stored.
        let Ok(name) = Nickname::new(name) else {
            return Ok(None);
        };
        self.repository
            .find_by_name(&name)
            .await
            .map_err(map_persistence_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockUserRepository;
    use crate::domain::{ErrorCode, Level};
    use rstest::rstest;

    fn user(name: &str) -> User {
        User::new(Nickname::new(name).expect("valid name"), Level::new(1), None)
    }

    fn service(repository: MockUserRepository) -> UsersQueryService<MockUserRepository> {
        UsersQueryService::new(Arc::new(repository))
    }

    #[tokio::test]
    async fn list_users_delegates_in_order() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_all()
            .times(1)
            .return_once(|| Ok(vec![user("steve"), user("alex")]));

        let users = service(repository).list_users().await.expect("users");
        let names: Vec<&str> = users.iter().map(|u| u.name().as_ref()).collect();
        assert_eq!(names, ["steve", "alex"]);
    }

    #[tokio::test]
    async fn get_user_looks_up_valid_names() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_name()
            .withf(|name| name.as_ref() == "steve")
            .times(1)
            .return_once(|_| Ok(Some(user("steve"))));

        let found = service(repository).get_user("steve").await.expect("lookup");
        assert_eq!(found, Some(user("steve")));
    }

    #[rstest]
    #[case("")]
    #[case(" padded ")]
    #[tokio::test]
    async fn get_user_skips_store_for_invalid_names(#[case] name: &str) {
        let mut repository = MockUserRepository::new();
        repository.expect_find_by_name().never();

        let found = service(repository).get_user(name).await.expect("lookup");
        assert!(found.is_none());
    }

    #[rstest]
    #[case(UserPersistenceError::connection("pool closed"), ErrorCode::ServiceUnavailable)]
    #[case(UserPersistenceError::query("disk I/O error"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn persistence_errors_map_to_domain_errors(
        #[case] failure: UserPersistenceError,
        #[case] expected: ErrorCode,
    ) {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_all()
            .times(1)
            .return_once(move || Err(failure));

        let error = service(repository).list_users().await.expect_err("fails");
        assert_eq!(error.code(), expected);
    }
}
