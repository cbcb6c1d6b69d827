use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use callback_core::{CallbackError, CallbackPolicy, CallbackRequest, ReceiverConfig, ReplyStatus};

pub use callback_core;

/// Builds the router serving `config.path` with the given policy.
pub fn router<P>(config: &ReceiverConfig, policy: P) -> Router
where
    P: CallbackPolicy + Send + Sync + 'static,
{
    Router::new()
        .route(&config.path, get(handle::<P>))
        .with_state(Arc::new(policy))
        .layer(TraceLayer::new_for_http())
}

/// GET /callback
pub async fn handle<P>(
    State(policy): State<Arc<P>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> impl IntoResponse
where
    P: CallbackPolicy + Send + Sync + 'static,
{
    let request = CallbackRequest::from_query_pairs(pairs);
    if request.has_code() {
        // never log the code itself
        info!("Authorization code received on callback");
    }

    let reply = policy.respond(&request);
    if !reply.is_success() {
        warn!("Callback rejected: missing authorization code");
    }

    (status_code(reply.status), reply.body)
}

fn status_code(status: ReplyStatus) -> StatusCode {
    match status {
        ReplyStatus::Ok => StatusCode::OK,
        ReplyStatus::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// A bound callback listener that has not started accepting yet.
pub struct CallbackServer {
    listener: TcpListener,
    config: ReceiverConfig,
    app: Router,
}

impl CallbackServer {
    pub async fn bind<P>(config: ReceiverConfig, policy: P) -> Result<Self, CallbackError>
    where
        P: CallbackPolicy + Send + Sync + 'static,
    {
        let addr = config.bind_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| CallbackError::Bind { addr, source })?;
        let app = router(&config, policy);

        Ok(Self {
            listener,
            config,
            app,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, CallbackError> {
        self.listener
            .local_addr()
            .map_err(CallbackError::LocalAddr)
    }

    /// Serves until the process is killed.
    pub async fn serve(self) -> Result<(), CallbackError> {
        self.serve_with_shutdown(std::future::pending()).await
    }

    /// Serves until `signal` resolves, then drains open connections.
    pub async fn serve_with_shutdown<F>(self, signal: F) -> Result<(), CallbackError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let port = self.local_addr()?.port();
        info!("Running on {}:{}", self.config.host, port);

        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(signal)
            .await?;

        Ok(())
    }
}
