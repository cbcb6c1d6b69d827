use crate::request::{CallbackReply, CallbackRequest};

pub const UNAUTHORIZED_MESSAGE: &str = "An error occured and you were not authorized";
pub const AUTHORIZED_MESSAGE: &str = "Successfully authorized, you can return to the terminal";

/// Decides what the browser sees for a callback request.
pub trait CallbackPolicy {
    /// Builds the reply for one request. Must not keep any state between calls.
    fn respond(&self, request: &CallbackRequest) -> CallbackReply;
}

/// Rejects callbacks without a usable code and never echoes the code back.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireCode;

impl CallbackPolicy for RequireCode {
    fn respond(&self, request: &CallbackRequest) -> CallbackReply {
        if request.has_code() {
            CallbackReply::ok(AUTHORIZED_MESSAGE)
        } else {
            CallbackReply::internal_error(UNAUTHORIZED_MESSAGE)
        }
    }
}

/// Always succeeds and shows the received code so the user can copy it.
///
/// A missing or empty code renders as an empty placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoCode;

impl CallbackPolicy for EchoCode {
    fn respond(&self, request: &CallbackRequest) -> CallbackReply {
        let code = request.code().unwrap_or_default();
        CallbackReply::ok(format!(
            "your auth code is {}\nyou can return to the terminal",
            code
        ))
    }
}
