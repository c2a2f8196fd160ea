use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Downstream timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Downstream returned status {status}: {body}")]
    DownstreamStatus { status: u16, body: String },

    #[error("Downstream response is not valid JSON: {0}")]
    DownstreamParse(#[from] serde_json::Error),

    #[error("Missing required field: input")]
    MissingInput,

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Stable label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Transport(_) => "transport",
            Self::Timeout { .. } => "timeout",
            Self::DownstreamStatus { .. } => "downstream_status",
            Self::DownstreamParse(_) => "downstream_parse",
            Self::MissingInput => "missing_input",
            Self::Yaml(_) => "yaml",
            Self::Io(_) => "io",
            Self::AddrParse(_) => "addr_parse",
        }
    }

    /// True for failures to reach the downstream service at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout { .. })
    }
}
