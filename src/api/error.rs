use thiserror::Error;

/// Errors from the remote resource client.
///
/// Failures are recovered entirely at the view boundary and rendered as
/// inline text, so the display message is the whole contract: a non-2xx
/// status maps to a fixed per-endpoint message rather than the server's own
/// error body; transport and decode failures surface the underlying message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status { message: &'static str },

    /// The request never completed or the body did not decode.
    #[error("{source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },
}
