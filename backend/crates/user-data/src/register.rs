//! Coarse result body of the registration endpoint.

use serde::{Deserialize, Serialize};

/// Registration outcome reported to clients.
///
/// Serialises as a bare JSON string such as `"Success"`. Internal failures
/// have no variant: the endpoint answers them with an empty 500 response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegisterUserResult {
    /// The submitted registration data was rejected.
    NotValidData,
    /// Another user already holds the nickname.
    DuplicatedName,
    /// The user was registered.
    Success,
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "test code uses expect for clear failure messages"
    )]

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RegisterUserResult::NotValidData, "\"NotValidData\"")]
    #[case(RegisterUserResult::DuplicatedName, "\"DuplicatedName\"")]
    #[case(RegisterUserResult::Success, "\"Success\"")]
    fn serialises_as_bare_string(#[case] result: RegisterUserResult, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&result).expect("serialise"), expected);
        let parsed: RegisterUserResult = serde_json::from_str(expected).expect("deserialise");
        assert_eq!(parsed, result);
    }
}
