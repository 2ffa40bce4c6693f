use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct EmailBody<'a> {
    pub email: &'a str,
}

// Body of a signup/unregister response. `detail` is a plain string for
// domain errors but validation errors send a structured value.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ReplyBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ReplyBody {
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: ReplyBody,
}

impl ApiReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
