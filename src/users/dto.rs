use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::records::dto::RecordItem;

/// Request body for registration. Optional arrays seed the user's first
/// helps and dangers in the same call.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub neurodivergence: Option<String>,
    #[serde(default)]
    pub helps: Option<Vec<String>>,
    #[serde(default)]
    pub dangers: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Full projection. `password` carries the argon2 hash, never the plaintext.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub about: Option<String>,
    pub neurodivergence: Option<String>,
    pub helps: Vec<RecordItem>,
    pub dangers: Vec<RecordItem>,
}

/// Projection with the credential and email left out.
#[derive(Debug, Serialize)]
pub struct SafeUserResponse {
    pub name: String,
    pub about: Option<String>,
    pub neurodivergence: Option<String>,
    pub helps: Vec<RecordItem>,
    pub dangers: Vec<RecordItem>,
}

#[derive(Debug, Deserialize)]
pub struct EditUserRequest {
    pub name: String,
    pub email: String,
    pub about: String,
    pub password: String,
    pub neurodivergence: String,
}

#[derive(Debug, Deserialize)]
pub struct EditAboutRequest {
    pub about: String,
}

#[derive(Debug, Deserialize)]
pub struct EditNeurodivergenceRequest {
    pub neurodivergence: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_projection_has_no_credential_or_email() {
        let safe = SafeUserResponse {
            name: "Ana".into(),
            about: None,
            neurodivergence: None,
            helps: vec![],
            dangers: vec![],
        };
        let json = serde_json::to_string(&safe).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("email"));
    }

    #[test]
    fn register_request_tolerates_missing_optional_fields() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"name":"Ana","email":"ana@example.com","password":"s3cret"}"#,
        )
        .unwrap();
        assert!(req.about.is_none());
        assert!(req.helps.is_none());
        assert!(req.dangers.is_none());
    }
}
