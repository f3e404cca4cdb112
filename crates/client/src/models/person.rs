//! Person lookup models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{opt_string_from_number_or_string, string_from_number_or_string};

/// Result of `GET /api/person_lookup`.
///
/// Sections are independent: `account` can be present while `cognito_user`
/// is absent, with the reason listed in `errors`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonLookup {
    #[serde(default, deserialize_with = "string_from_number_or_string")]
    pub person_id: String,
    #[serde(default)]
    pub account: Option<Account>,
    #[serde(default)]
    pub cognito_user: Option<CognitoUser>,
    /// Non-fatal warnings.
    #[serde(default)]
    pub errors: Vec<String>,
    /// Fatal error reported with a 2xx status.
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default, deserialize_with = "opt_string_from_number_or_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CognitoUser {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// `None` when Cognito did not report the flag (`null` or missing).
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

/// Body of `POST /api/set_person_enabled_status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetPersonEnabledRequest {
    pub person_id: String,
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_only_lookup_parses() {
        let lookup: PersonLookup = serde_json::from_value(serde_json::json!({
            "person_id": "abc",
            "account": {"id": "acc-1", "name": "Acme"},
            "cognito_user": null,
            "errors": ["No 'Customer' Cognito User Pool found for account Acme."]
        }))
        .unwrap();

        assert_eq!(lookup.account.unwrap().name.as_deref(), Some("Acme"));
        assert!(lookup.cognito_user.is_none());
        assert_eq!(lookup.errors.len(), 1);
        assert!(lookup.error.is_none());
    }

    #[test]
    fn test_null_enabled_keeps_the_rest_of_the_lookup() {
        let lookup: PersonLookup = serde_json::from_value(serde_json::json!({
            "person_id": "abc",
            "account": {"id": "acc-1", "name": "Acme"},
            "cognito_user": {"username": "abc", "status": "CONFIRMED", "enabled": null},
            "errors": []
        }))
        .unwrap();

        assert_eq!(lookup.account.unwrap().name.as_deref(), Some("Acme"));
        let user = lookup.cognito_user.unwrap();
        assert_eq!(user.enabled, None);
        assert_eq!(user.status.as_deref(), Some("CONFIRMED"));
    }
}
