//! # Parameter Shape
//!
//! Structural checks on a launch body, run before any signature work.

use serde::{Deserialize, Serialize};
use shared_types::Parameters;

/// The only supported `lti_version`.
pub const LTI_VERSION: &str = "LTI-1p0";

pub const BASIC_LAUNCH_REQUEST: &str = "basic-lti-launch-request";
pub const CONTENT_ITEM_SELECTION_REQUEST: &str = "ContentItemSelectionRequest";

/// Keys a content-item selection request must not carry.
const CONTENT_ITEM_FORBIDDEN: &[&str] = &[
    "resource_link_id",
    "resource_link_title",
    "resource_link_description",
    "launch_presentation_return_url",
    "lis_result_sourcedid",
];

/// Accepted `lti_message_type` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    BasicLaunch,
    ContentItemSelection,
}

impl MessageType {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageType::BasicLaunch => BASIC_LAUNCH_REQUEST,
            MessageType::ContentItemSelection => CONTENT_ITEM_SELECTION_REQUEST,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            BASIC_LAUNCH_REQUEST => Some(MessageType::BasicLaunch),
            CONTENT_ITEM_SELECTION_REQUEST => Some(MessageType::ContentItemSelection),
            _ => None,
        }
    }
}

/// Checks version and message-type rules.
///
/// Returns the message type, or a description of the first violated rule.
pub fn validate_parameters(body: &Parameters) -> Result<MessageType, String> {
    match body.get_str("lti_version") {
        Some(LTI_VERSION) => {}
        Some(other) => return Err(format!("unsupported lti_version: {other}")),
        None => return Err("missing lti_version".into()),
    }

    let message_type = body
        .get_str("lti_message_type")
        .ok_or_else(|| "missing lti_message_type".to_string())?;

    match MessageType::parse(message_type) {
        Some(MessageType::BasicLaunch) => {
            if !body.contains_key("resource_link_id") {
                return Err("basic launch requires resource_link_id".into());
            }
            Ok(MessageType::BasicLaunch)
        }
        Some(MessageType::ContentItemSelection) => {
            if let Some(key) = CONTENT_ITEM_FORBIDDEN
                .iter()
                .find(|key| body.contains_key(key))
            {
                return Err(format!("content item selection must not carry {key}"));
            }
            Ok(MessageType::ContentItemSelection)
        }
        None => Err(format!("unsupported lti_message_type: {message_type}")),
    }
}
