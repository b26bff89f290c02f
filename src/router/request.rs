//! Request and response envelopes exchanged with the invocation shim.

use super::error::HandlerError;

/// An inbound invocation: an operation name and its string arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub function: String,
    pub args: Vec<String>,
}

impl Request {
    pub fn new<I, A>(function: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Request {
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a flat argument list whose first element is the function name.
    /// An empty list yields an empty function name.
    pub fn from_args(args: Vec<String>) -> Self {
        let mut args = args.into_iter();
        let function = args.next().unwrap_or_default();
        Request {
            function,
            args: args.collect(),
        }
    }
}

/// Outcome of one invocation: success with a payload, or failure with a
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub payload: Vec<u8>,
    pub message: String,
}

impl Response {
    pub const OK: u16 = 200;

    pub fn ok(payload: Vec<u8>) -> Self {
        Response {
            status: Self::OK,
            payload,
            message: String::new(),
        }
    }

    pub fn from_error(err: &HandlerError) -> Self {
        Response {
            status: err.status_code(),
            payload: Vec::new(),
            message: err.to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Self::OK
    }
}

impl From<HandlerError> for Response {
    fn from(err: HandlerError) -> Self {
        Self::from_error(&err)
    }
}
