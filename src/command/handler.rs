use lambda_http::{Body, Error, Request, Response};
use tracing::{info, warn};

use crate::clock::Clock;
use crate::config::CommandConfig;
use crate::form;
use crate::message;
use crate::types::{CommandRequest, CommandResponse, ResponseType};

/// The slash-command endpoint. Holds the pieces that outlive a single
/// invocation (shared token, clock); each call is an independent
/// request/response transform with no other state.
pub struct CommandHandler<C: Clock> {
    config: CommandConfig,
    clock: C,
}

impl<C: Clock> CommandHandler<C> {
    pub fn new(config: CommandConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn handle(&self, event: Request) -> Result<Response<Body>, Error> {
        let body_string = match std::str::from_utf8(event.body()) {
            Ok(body) => body,
            Err(_) => {
                warn!("rejected request: body is not UTF-8");
                return empty_json(400);
            }
        };

        let params = match form::decode(body_string) {
            Ok(params) => params,
            Err(err) => {
                warn!("rejected request: {}", err);
                return empty_json(400);
            }
        };

        let command = CommandRequest::from_params(params);

        if !self.config.token_matches(&command.token) {
            warn!(
                channel = %command.channel_name,
                user = %command.user_name,
                "rejected command with bad token"
            );
            return empty_json(401);
        }

        let today = self.clock.now().date_naive();
        let note = message::standup_note(today, &command.text);
        info!(
            command = %command.command,
            channel = %command.channel_name,
            user = %command.user_name,
            "posting standup note"
        );

        let response = CommandResponse {
            response_type: ResponseType::InChannel,
            text: note,
        };

        Ok(Response::builder()
            .status(200)
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&response)?))?)
    }
}

/// 400/401 responses carry an empty JSON object; the platform shows the
/// caller a generic failure either way.
fn empty_json(status: u16) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from("{}"))?)
}
