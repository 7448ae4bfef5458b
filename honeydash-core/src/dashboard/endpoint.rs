use std::str::FromStr;

pub const INDEX_ASSET: &str = "index.html";
const ASSET_PREFIX: &str = "/assets/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEndpoint {
    Index,
    Asset(String),
    Stats,
}

impl FromStr for DashboardEndpoint {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "/" | "/index.html" => Ok(DashboardEndpoint::Index),
            "/api/stats" => Ok(DashboardEndpoint::Stats),
            _ => {
                let name = s
                    .strip_prefix(ASSET_PREFIX)
                    .ok_or("unknown dashboard endpoint")?;

                // Embedded assets are a flat namespace; no traversal, no nesting.
                if name.is_empty() || name.contains('/') || name.contains("..") {
                    return Err("invalid asset path");
                }

                Ok(DashboardEndpoint::Asset(name.to_string()))
            }
        }
    }
}

impl DashboardEndpoint {
    pub fn asset_name(&self) -> Option<&str> {
        match self {
            DashboardEndpoint::Index => Some(INDEX_ASSET),
            DashboardEndpoint::Asset(name) => Some(name),
            DashboardEndpoint::Stats => None,
        }
    }
}
