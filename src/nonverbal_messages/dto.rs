use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Category tag carried by every nonverbal message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "nonverbal_message_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NonverbalMessageType {
    Feelings,
    Problems,
}

/// Projection shared by user-owned messages and catalog defaults. For a
/// default, the favorite flag comes from the per-user join row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct NonverbalMessageItem {
    pub id: Uuid,
    pub content: String,
    pub emoji_icon: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: NonverbalMessageType,
    pub is_favorited: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateNonverbalMessageRequest {
    pub content: String,
    pub emoji_icon: String,
    #[serde(rename = "type")]
    pub kind: NonverbalMessageType,
}

#[derive(Debug, Deserialize)]
pub struct EditNonverbalMessageRequest {
    pub content: String,
    pub emoji_icon: String,
    #[serde(rename = "type")]
    pub kind: NonverbalMessageType,
    pub is_favorited: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_tag_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&NonverbalMessageType::Feelings).unwrap(),
            r#""feelings""#
        );
        assert_eq!(
            serde_json::to_string(&NonverbalMessageType::Problems).unwrap(),
            r#""problems""#
        );
    }

    #[test]
    fn item_uses_the_type_field_name() {
        let item = NonverbalMessageItem {
            id: Uuid::new_v4(),
            content: "I need some quiet".into(),
            emoji_icon: "🤫".into(),
            kind: NonverbalMessageType::Problems,
            is_favorited: true,
        };
        let json: serde_json::Value = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "problems");
        assert_eq!(json["emoji_icon"], "🤫");
        assert_eq!(json["is_favorited"], true);
    }

    #[test]
    fn create_request_parses_the_type_field() {
        let req: CreateNonverbalMessageRequest = serde_json::from_str(
            r#"{"content":"I am feeling sad","emoji_icon":"😢","type":"feelings"}"#,
        )
        .unwrap();
        assert_eq!(req.kind, NonverbalMessageType::Feelings);
    }
}
