use serde::Serialize;
use std::collections::HashMap;

/// A slash-command invocation, built from the decoded form parameters.
///
/// Mattermost sends more fields than these (`team_id`, `channel_id`,
/// `response_url`, `trigger_id`, ...); only the ones the handler reads are
/// kept. A field absent from the body decodes to an empty string rather
/// than failing.
#[derive(Debug, Clone)]
pub struct CommandRequest {
    pub token: String,
    pub channel_name: String,
    pub user_name: String,
    pub command: String,
    pub text: String,
}

impl CommandRequest {
    pub fn from_params(mut params: HashMap<String, String>) -> Self {
        let mut take = |key: &str| params.remove(key).unwrap_or_default();
        Self {
            token: take("token"),
            channel_name: take("channel_name"),
            user_name: take("user_name"),
            command: take("command"),
            text: take("text"),
        }
    }
}

/// The envelope Mattermost renders back into the channel.
#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub response_type: ResponseType,
    pub text: String,
}

/// Who sees the command output: everyone in the channel, or only the
/// invoking user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    InChannel,
    Ephemeral,
}
