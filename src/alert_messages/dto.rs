use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AlertMessageItem {
    pub id: Uuid,
    pub content: String,
    pub is_favorited: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateAlertMessageRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct EditContentRequest {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_with_favorite_flag() {
        let item = AlertMessageItem {
            id: Uuid::new_v4(),
            content: "Please call my sister".into(),
            is_favorited: false,
        };
        let json: serde_json::Value = serde_json::to_value(&item).unwrap();
        assert_eq!(json["content"], "Please call my sister");
        assert_eq!(json["is_favorited"], false);
    }
}
