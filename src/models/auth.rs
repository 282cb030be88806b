//! Authentication models and role resolution

use serde::{Deserialize, Serialize};

/// Account roles, derived from login linkage and never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Artist,
    Listener,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Artist => write!(f, "artist"),
            Role::Listener => write!(f, "listener"),
        }
    }
}

/// Which account a login row points at, computed once at read time.
///
/// A valid row links exactly one of the two accounts; anything else is
/// `Invalid` and must be surfaced as corruption, not as bad credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountLinkage {
    Artist(i32),
    Listener(i32),
    Invalid,
}

impl AccountLinkage {
    pub fn resolve(user_id: Option<i32>, artist_id: Option<i32>) -> Self {
        match (artist_id, user_id) {
            (Some(artist), None) => AccountLinkage::Artist(artist),
            (None, Some(user)) => AccountLinkage::Listener(user),
            _ => AccountLinkage::Invalid,
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            AccountLinkage::Artist(_) => Some(Role::Artist),
            AccountLinkage::Listener(_) => Some(Role::Listener),
            AccountLinkage::Invalid => None,
        }
    }
}

/// Login request body; both fields are checked together so an absent and an
/// empty credential produce the same reply
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub login_id: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// Both credentials, present and non-empty
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.login_id.as_deref(), self.password.as_deref()) {
            (Some(l), Some(p)) if !l.is_empty() && !p.is_empty() => Some((l, p)),
            _ => None,
        }
    }
}

/// Successful login response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub role: Role,
    pub login_id: i32,
    pub user_id: Option<i32>,
    pub artist_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn linkage_is_total_over_both_flags() {
        assert_eq!(
            AccountLinkage::resolve(None, Some(7)),
            AccountLinkage::Artist(7)
        );
        assert_eq!(
            AccountLinkage::resolve(Some(3), None),
            AccountLinkage::Listener(3)
        );
        assert_eq!(
            AccountLinkage::resolve(Some(3), Some(7)),
            AccountLinkage::Invalid
        );
        assert_eq!(AccountLinkage::resolve(None, None), AccountLinkage::Invalid);
    }

    #[test]
    fn invalid_linkage_never_yields_a_role() {
        assert_eq!(AccountLinkage::resolve(Some(3), Some(7)).role(), None);
        assert_eq!(AccountLinkage::resolve(None, None).role(), None);
        assert_eq!(
            AccountLinkage::resolve(Some(3), None).role(),
            Some(Role::Listener)
        );
        assert_eq!(
            AccountLinkage::resolve(None, Some(7)).role(),
            Some(Role::Artist)
        );
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Role::Artist).unwrap(), "artist");
        assert_eq!(serde_json::to_value(Role::Listener).unwrap(), "listener");
    }

    #[test]
    fn login_request_requires_both_fields() {
        let req = LoginRequest {
            login_id: Some("12".to_string()),
            password: Some("".to_string()),
        };
        assert_eq!(req.credentials(), None);

        let req = LoginRequest {
            login_id: None,
            password: Some("hunter2".to_string()),
        };
        assert_eq!(req.credentials(), None);

        let req = LoginRequest {
            login_id: Some("12".to_string()),
            password: Some("hunter2".to_string()),
        };
        assert_eq!(req.credentials(), Some(("12", "hunter2")));
    }
}
