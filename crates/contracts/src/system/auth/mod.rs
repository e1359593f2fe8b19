use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// One allow-list entry of the login gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
    /// Directory name of the user this account signs in as
    pub display_name: String,
}

/// Who is signed in to the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,
}

/// Static username → password lookup. Not a security boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CredentialTable {
    entries: Vec<Credential>,
}

impl CredentialTable {
    pub fn new(entries: Vec<Credential>) -> Self {
        Self { entries }
    }

    pub fn check(&self, request: &LoginRequest) -> Result<UserInfo, AuthError> {
        self.entries
            .iter()
            .find(|c| c.username == request.username && c.password == request.password)
            .map(|c| UserInfo {
                username: c.username.clone(),
                display_name: c.display_name.clone(),
            })
            .ok_or(AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CredentialTable {
        CredentialTable::new(vec![Credential {
            username: "demo".into(),
            password: "demo".into(),
            display_name: "John Smith".into(),
        }])
    }

    #[test]
    fn test_check_accepts_listed_pair() {
        let info = table().check(&LoginRequest::new("demo", "demo")).unwrap();
        assert_eq!(info.display_name, "John Smith");
    }

    #[test]
    fn test_check_rejects_wrong_password_and_unknown_user() {
        assert_eq!(
            table().check(&LoginRequest::new("demo", "wrong")),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            table().check(&LoginRequest::new("Demo", "demo")),
            Err(AuthError::InvalidCredentials)
        );
    }
}
