use thiserror::Error;

/// Failures the resolver can hit while walking the command tree.
///
/// Both variants carry the usage text of the command node where the walk
/// stopped, so callers can show context without re-walking the tree.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Unknown option: {token}")]
    UnknownOption { token: String, usage: String },

    #[error("Unknown sub command: {token}")]
    UnknownSubcommand { token: String, usage: String },
}

pub type ParseResult<T> = Result<T, ParseError>;

impl ParseError {
    /// The offending argument token.
    pub fn token(&self) -> &str {
        match self {
            ParseError::UnknownOption { token, .. } => token,
            ParseError::UnknownSubcommand { token, .. } => token,
        }
    }

    /// Usage text of the command node where resolution failed.
    pub fn usage(&self) -> &str {
        match self {
            ParseError::UnknownOption { usage, .. } => usage,
            ParseError::UnknownSubcommand { usage, .. } => usage,
        }
    }
}
