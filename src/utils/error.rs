use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unexpected end of input at line {line}: expected {expected}")]
    UnexpectedEof { expected: String, line: usize },

    #[error("Invalid token '{token}' at line {line}: expected {expected} ({reason})")]
    InvalidToken {
        expected: String,
        token: String,
        line: usize,
        reason: String,
    },

    #[error("Invalid UTF-8 in token '{token}' at line {line}")]
    InvalidEncoding { token: String, line: usize },
}

impl CheckError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            CheckError::IoError(e) => format!("could not read input or write output: {}", e),
            CheckError::UnexpectedEof { expected, line } => {
                format!("input ended after line {} while reading {}", line, expected)
            }
            CheckError::InvalidToken {
                expected,
                token,
                line,
                ..
            } => format!("'{}' on line {} is not a valid {}", token, line, expected),
            CheckError::InvalidEncoding { token, line } => {
                format!("'{}' on line {} is not valid UTF-8 text", token, line)
            }
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::IoError(_) => 2,
            CheckError::UnexpectedEof { .. }
            | CheckError::InvalidToken { .. }
            | CheckError::InvalidEncoding { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
