use crate::dashboard::handler::DashboardHandler;
use async_trait::async_trait;
use pingora::prelude::{HttpPeer, ProxyHttp, Session};
use pingora::{Custom, Error};
use std::path::PathBuf;

pub struct DashboardGateway {
    handler: DashboardHandler,
}

impl DashboardGateway {
    pub fn new(log_path: PathBuf) -> Self {
        Self {
            handler: DashboardHandler::new(log_path),
        }
    }
}

#[async_trait]
impl ProxyHttp for DashboardGateway {
    type CTX = ();

    fn new_ctx(&self) -> Self::CTX {}

    async fn upstream_peer(
        &self,
        _session: &mut Session,
        _ctx: &mut Self::CTX,
    ) -> pingora::Result<Box<HttpPeer>> {
        // Unreachable: request_filter answers every request.
        Err(Error::new(Custom(
            "DashboardGateway attempted to proxy upstream (bug)",
        )))
    }

    async fn request_filter(
        &self,
        session: &mut Session,
        _ctx: &mut Self::CTX,
    ) -> pingora::Result<bool> {
        // DashboardGateway is terminal: it always handles the request.
        self.handler.handle(session).await
    }
}
