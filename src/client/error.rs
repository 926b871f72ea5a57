use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    MissingAttribute(&'static str),
    InvalidAttribute { name: &'static str, value: String },
    Transport(String),
    Decode(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAttribute(name) => write!(f, "missing attribute `{name}`"),
            Self::InvalidAttribute { name, value } => {
                write!(f, "attribute `{name}` has invalid value {value:?}")
            }
            Self::Transport(reason) => write!(f, "{reason}"),
            Self::Decode(reason) => write!(f, "unexpected response: {reason}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
