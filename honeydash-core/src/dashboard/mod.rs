//! HTTP surface of the dashboard.
//!
//! A terminal Pingora gateway: every request is answered locally from
//! `request_filter` and nothing is ever proxied upstream.
//!
//! - `/`            the embedded dashboard page
//! - `/assets/<f>`  other embedded page assets
//! - `/api/stats`   a freshly computed [`crate::stats::StatsSnapshot`] as JSON

mod assets;
mod endpoint;
mod gateway;
mod handler;

#[cfg(test)]
mod tests;

pub use assets::{DashboardAssets, StaticAsset, load_asset};
pub use endpoint::DashboardEndpoint;
pub use gateway::DashboardGateway;
pub use handler::{DashboardHandler, DashboardResponse};
