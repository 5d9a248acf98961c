use lambda_http::Error;

const TOKEN_VAR: &str = "MATTERMOST_COMMAND_TOKEN";

/// Static configuration for the command endpoint, loaded once at startup
/// and handed to the handler at construction time.
#[derive(Debug, Clone)]
pub struct CommandConfig {
    token: String,
}

impl CommandConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Reads the slash command's shared token from the environment.
    /// An unset or empty token fails startup.
    pub fn from_env() -> Result<Self, Error> {
        let token = std::env::var(TOKEN_VAR)
            .map_err(|_| format!("{} must be set", TOKEN_VAR))?;
        if token.is_empty() {
            return Err(format!("{} must not be empty", TOKEN_VAR).into());
        }
        Ok(Self { token })
    }

    /// Plain string equality. The token is a shared secret sent in the
    /// request body, not a signature.
    pub fn token_matches(&self, supplied: &str) -> bool {
        supplied == self.token
    }
}
