use serde::{Deserialize, Serialize};

/// One entry of the Gmail message list response
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MessageSummary {
    pub id: String,
    #[serde(rename = "threadId", default)]
    pub thread_id: String,
}

/// A message header name/value pair
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Header {
    pub name: String,
    pub value: String,
}

/// Body of a message part, data is base64url-encoded
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MessageBody {
    #[serde(default)]
    pub data: Option<String>,
}

/// A single MIME part of a message payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MessagePart {
    #[serde(rename = "mimeType", default)]
    pub mime_type: String,
    #[serde(default)]
    pub body: MessageBody,
}

/// Payload of a full Gmail message
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MessagePayload {
    #[serde(default)]
    pub headers: Vec<Header>,
    #[serde(default)]
    pub parts: Option<Vec<MessagePart>>,
    #[serde(default)]
    pub body: MessageBody,
}

/// A full Gmail message as returned by format=full
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Message {
    pub id: String,
    #[serde(default)]
    pub payload: MessagePayload,
}

/// Start or end of a calendar event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDateTime {
    #[serde(rename = "dateTime")]
    pub date_time: String,
    #[serde(rename = "timeZone")]
    pub time_zone: String,
}

/// Request body for creating a calendar event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub summary: String,
    pub start: EventDateTime,
    pub end: EventDateTime,
}
