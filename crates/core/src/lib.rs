use std::{io, net::SocketAddr};

use thiserror::Error;

pub mod config;
pub mod policy;
pub mod request;

pub use config::ReceiverConfig;
pub use policy::{CallbackPolicy, EchoCode, RequireCode};
pub use request::{CallbackReply, CallbackRequest, ReplyStatus};

/// Errors raised while running the callback receiver.
///
/// A missing authorization code is not one of these: it is answered with a
/// reply by [`RequireCode`] and never leaves the request handler.
#[derive(Error, Debug)]
pub enum CallbackError {
    /// The listening socket could not be acquired
    #[error("failed to bind callback listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// The bound listener could not report its address
    #[error("failed to read callback listener address: {0}")]
    LocalAddr(#[source] io::Error),

    /// The accept loop stopped with an I/O error
    #[error("callback server stopped unexpectedly: {0}")]
    Serve(#[from] io::Error),
}
