use crate::error::{gmail_error, SyncResult};
use crate::sync::MailService;
use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use reqwest::Client;
use serde_json::json;
use url::Url;

use super::models::{Message, MessageSummary};

const GMAIL_API_BASE: &str = "https://www.googleapis.com/gmail/v1/users/me";

/// Gmail REST API client
#[derive(Clone, Default)]
pub struct GmailClient {
    client: Client,
}

impl GmailClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl MailService for GmailClient {
    /// List unread messages from the given sender
    async fn list_unread(&self, token: &str, sender: &str) -> SyncResult<Vec<MessageSummary>> {
        let query = format!("from:{} is:unread", sender);

        let mut url = Url::parse(&format!("{}/messages", GMAIL_API_BASE))
            .map_err(|e| gmail_error(&format!("Failed to parse URL: {}", e)))?;
        url.query_pairs_mut().append_pair("q", &query);

        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| gmail_error(&format!("Failed to list messages: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(gmail_error(&format!(
                "Failed to list messages: HTTP {} - {}",
                status, error_body
            )));
        }

        let response_data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| gmail_error(&format!("Failed to parse list response: {}", e)))?;

        // An empty mailbox has no "messages" field at all
        let summaries = match response_data.get("messages") {
            Some(messages) => serde_json::from_value(messages.clone())?,
            None => Vec::new(),
        };

        Ok(summaries)
    }

    /// Fetch a full message (headers and body parts) by id
    async fn get_message(&self, token: &str, id: &str) -> SyncResult<Message> {
        let mut url = Url::parse(&format!("{}/messages/{}", GMAIL_API_BASE, id))
            .map_err(|e| gmail_error(&format!("Failed to parse URL: {}", e)))?;
        url.query_pairs_mut().append_pair("format", "full");

        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| gmail_error(&format!("Failed to fetch message {}: {}", id, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(gmail_error(&format!(
                "Failed to fetch message {}: HTTP {} - {}",
                id, status, error_body
            )));
        }

        let message: Message = response
            .json()
            .await
            .map_err(|e| gmail_error(&format!("Failed to parse message {}: {}", id, e)))?;

        Ok(message)
    }

    /// Remove the UNREAD label from a message
    async fn mark_read(&self, token: &str, id: &str) -> SyncResult<()> {
        let url = format!("{}/messages/{}/modify", GMAIL_API_BASE, id);

        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", token))
            .json(&json!({ "removeLabelIds": ["UNREAD"] }))
            .send()
            .await
            .map_err(|e| gmail_error(&format!("Failed to mark message {} as read: {}", id, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(gmail_error(&format!(
                "Failed to mark message {} as read: HTTP {} - {}",
                id, status, error_body
            )));
        }

        Ok(())
    }
}

/// Check whether a message's From header contains the configured sender.
///
/// Header names are matched case-insensitively; the value check is a plain
/// substring match, so "Notices <gym@example.com>" passes for
/// "gym@example.com". So would "othergym@example.com" — the match is not
/// anchored to an address boundary.
pub fn from_matches(message: &Message, sender: &str) -> bool {
    message
        .payload
        .headers
        .iter()
        .any(|header| header.name.eq_ignore_ascii_case("from") && header.value.contains(sender))
}

/// Decode the plain-text body of a message.
///
/// Prefers the text/plain MIME part; falls back to the top-level payload body.
/// Messages without either decode to an empty string.
pub fn plain_text_body(message: &Message) -> String {
    let data = if let Some(parts) = &message.payload.parts {
        parts
            .iter()
            .find(|part| part.mime_type == "text/plain")
            .and_then(|part| part.body.data.as_deref())
    } else {
        message.payload.body.data.as_deref()
    };

    let Some(data) = data else {
        return String::new();
    };

    // Gmail uses base64url, usually without padding
    match URL_SAFE_NO_PAD.decode(data.trim_end_matches('=')) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::google::models::{Header, MessageBody, MessagePart, MessagePayload};

    fn message_with_from(value: &str) -> Message {
        Message {
            id: "m1".to_string(),
            payload: MessagePayload {
                headers: vec![Header {
                    name: "From".to_string(),
                    value: value.to_string(),
                }],
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_from_matches_substring() {
        let message = message_with_from("Notices <gym@example.com>");
        assert!(from_matches(&message, "gym@example.com"));
    }

    #[test]
    fn test_from_header_name_case_insensitive() {
        let mut message = message_with_from("gym@example.com");
        message.payload.headers[0].name = "from".to_string();
        assert!(from_matches(&message, "gym@example.com"));
    }

    #[test]
    fn test_from_matches_is_not_anchored() {
        // Known looseness: a look-alike sender containing the substring passes
        let message = message_with_from("othergym@example.com");
        assert!(from_matches(&message, "gym@example.com"));
    }

    #[test]
    fn test_from_mismatch() {
        let message = message_with_from("news@elsewhere.org");
        assert!(!from_matches(&message, "gym@example.com"));
    }

    #[test]
    fn test_body_from_text_plain_part() {
        let message = Message {
            id: "m1".to_string(),
            payload: MessagePayload {
                parts: Some(vec![
                    MessagePart {
                        mime_type: "text/html".to_string(),
                        body: MessageBody {
                            data: Some(URL_SAFE_NO_PAD.encode("<p>html</p>")),
                        },
                    },
                    MessagePart {
                        mime_type: "text/plain".to_string(),
                        body: MessageBody {
                            data: Some(URL_SAFE_NO_PAD.encode("Yoga on 3/5/2024 at 6:30pm")),
                        },
                    },
                ]),
                ..Default::default()
            },
        };

        assert_eq!(plain_text_body(&message), "Yoga on 3/5/2024 at 6:30pm");
    }

    #[test]
    fn test_body_falls_back_to_payload() {
        let message = Message {
            id: "m1".to_string(),
            payload: MessagePayload {
                body: MessageBody {
                    data: Some(URL_SAFE_NO_PAD.encode("plain body")),
                },
                ..Default::default()
            },
        };

        assert_eq!(plain_text_body(&message), "plain body");
    }

    #[test]
    fn test_missing_body_is_empty() {
        let message = Message::default();
        assert_eq!(plain_text_body(&message), "");
    }
}
