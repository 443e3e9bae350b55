//! Bot API wire types — only the fields the bot actually reads.

use serde::Deserialize;

/// Every Bot API response is wrapped in this envelope.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub from: Option<User>,
    pub chat: Chat,
    pub text: Option<String>,
    /// Photo attachments arrive as multiple resolutions of one image.
    #[serde(default)]
    pub photo: Vec<PhotoSize>,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoSize {
    pub file_id: String,
    pub width: u32,
    pub height: u32,
    pub file_size: Option<u64>,
}

/// getFile result: the path is what the file endpoint serves.
#[derive(Debug, Deserialize)]
pub struct TgFile {
    pub file_id: String,
    pub file_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_command_update() {
        let raw = r#"{
            "update_id": 7,
            "message": {
                "message_id": 42,
                "from": { "id": 1001, "username": "owner" },
                "chat": { "id": 1001 },
                "text": "/update_price price-1 ₹1,999"
            }
        }"#;
        let update: Update = serde_json::from_str(raw).unwrap();
        let msg = update.message.unwrap();
        assert_eq!(msg.from.unwrap().id, 1001);
        assert_eq!(msg.text.as_deref(), Some("/update_price price-1 \u{20b9}1,999"));
        assert!(msg.photo.is_empty());
    }

    #[test]
    fn deserializes_a_photo_update() {
        let raw = r#"{
            "update_id": 8,
            "message": {
                "message_id": 43,
                "from": { "id": 1001 },
                "chat": { "id": 1001 },
                "photo": [
                    { "file_id": "small", "width": 90, "height": 60 },
                    { "file_id": "big", "width": 1280, "height": 853, "file_size": 93211 }
                ]
            }
        }"#;
        let update: Update = serde_json::from_str(raw).unwrap();
        let msg = update.message.unwrap();
        assert_eq!(msg.photo.len(), 2);
        assert_eq!(msg.photo[1].file_id, "big");
    }
}
