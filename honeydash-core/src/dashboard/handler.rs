use crate::dashboard::assets::load_asset;
use crate::dashboard::endpoint::DashboardEndpoint;
use crate::stats::collect_snapshot;
use http::{Method, StatusCode, header};
use pingora::prelude::Session;
use pingora_http::ResponseHeader;
use std::path::PathBuf;
use std::sync::Arc;

const ALLOWED_METHODS: &str = "GET, HEAD";

/// A fully rendered response, ready to be written to the session.
#[derive(Debug)]
pub struct DashboardResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub allow: Option<&'static str>,
    pub body: Vec<u8>,
}

impl DashboardResponse {
    fn new(status: StatusCode, content_type: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            status,
            content_type: Some(content_type.into()),
            allow: None,
            body,
        }
    }

    fn json(status: StatusCode, value: &serde_json::Value) -> Self {
        // Serializing a `Value` cannot fail.
        let body = serde_json::to_vec(value).unwrap_or_default();
        Self::new(status, "application/json", body)
    }

    fn error(status: StatusCode, message: &str) -> Self {
        Self::json(status, &serde_json::json!({ "error": message }))
    }

    fn method_not_allowed() -> Self {
        Self {
            status: StatusCode::METHOD_NOT_ALLOWED,
            content_type: None,
            allow: Some(ALLOWED_METHODS),
            body: Vec::new(),
        }
    }
}

pub struct DashboardHandler {
    log_path: Arc<PathBuf>,
}

impl DashboardHandler {
    pub fn new(log_path: PathBuf) -> Self {
        Self {
            log_path: Arc::new(log_path),
        }
    }

    pub(crate) async fn handle(&self, session: &mut Session) -> pingora::Result<bool> {
        let method = session.req_header().method.clone();
        let path = session.req_header().uri.path().to_owned();

        let response = self.respond(&method, &path).await;

        tracing::debug!(
            method = %method,
            path = %path,
            status = response.status.as_u16(),
            "dashboard request"
        );

        self.send_response(session, &method, response).await?;
        Ok(true)
    }

    /// Route a request and render its response.
    pub async fn respond(&self, method: &Method, path: &str) -> DashboardResponse {
        let Ok(endpoint) = path.parse::<DashboardEndpoint>() else {
            return DashboardResponse::error(StatusCode::NOT_FOUND, "not found");
        };

        if method != Method::GET && method != Method::HEAD {
            return DashboardResponse::method_not_allowed();
        }

        match endpoint {
            DashboardEndpoint::Stats => self.stats_response().await,
            DashboardEndpoint::Index | DashboardEndpoint::Asset(_) => {
                let name = endpoint.asset_name().unwrap_or_default();
                match load_asset(name) {
                    Some(asset) => DashboardResponse::new(
                        StatusCode::OK,
                        asset.content_type,
                        asset.body.into_owned(),
                    ),
                    None => DashboardResponse::error(StatusCode::NOT_FOUND, "not found"),
                }
            }
        }
    }

    async fn stats_response(&self) -> DashboardResponse {
        let log_path = self.log_path.clone();

        // Full blocking scan of the log, kept off the async workers.
        let snapshot =
            match tokio::task::spawn_blocking(move || collect_snapshot(log_path.as_path())).await {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    tracing::error!(error = %e, "stats computation task failed");
                    return DashboardResponse::error(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "failed to compute statistics",
                    );
                }
            };

        match serde_json::to_vec(&snapshot) {
            Ok(body) => DashboardResponse::new(StatusCode::OK, "application/json", body),
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize stats snapshot");
                DashboardResponse::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "json serialization failed",
                )
            }
        }
    }

    async fn send_response(
        &self,
        session: &mut Session,
        method: &Method,
        response: DashboardResponse,
    ) -> pingora::Result<()> {
        let mut resp = ResponseHeader::build(response.status, None)?;
        if let Some(content_type) = &response.content_type {
            resp.insert_header(header::CONTENT_TYPE, content_type.as_str())?;
        }
        if let Some(allow) = response.allow {
            resp.insert_header(header::ALLOW, allow)?;
        }
        resp.insert_header(header::CACHE_CONTROL, "no-store")?;
        resp.insert_header(header::CONTENT_LENGTH, response.body.len().to_string())?;

        // HEAD and empty bodies end with the header.
        if *method == Method::HEAD || response.body.is_empty() {
            session.write_response_header(Box::new(resp), true).await?;
            return Ok(());
        }

        session.write_response_header(Box::new(resp), false).await?;
        session
            .write_response_body(Some(response.body.into()), true)
            .await?;

        Ok(())
    }
}
