use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn length_mismatch(index: usize, expected: usize, actual: usize) -> Error {
        Error(
            ErrorKind::LengthMismatch {
                index,
                expected,
                actual,
            }
            .into(),
        )
    }

    pub fn unknown_operator(name: impl Into<String>) -> Error {
        Error(ErrorKind::UnknownOperator { name: name.into() }.into())
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error(
        "all sequences must be of the same length: \
         sequence {index} has length {actual}, expected {expected}"
    )]
    LengthMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("not a valid operator: '{name}'")]
    UnknownOperator { name: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
