use crate::dashboard::DashboardEndpoint;
use pretty_assertions::assert_eq;

#[test]
fn known_routes_resolve() {
    assert_eq!("/".parse::<DashboardEndpoint>(), Ok(DashboardEndpoint::Index));
    assert_eq!("/index.html".parse::<DashboardEndpoint>(), Ok(DashboardEndpoint::Index));
    assert_eq!("/api/stats".parse::<DashboardEndpoint>(), Ok(DashboardEndpoint::Stats));
    assert_eq!(
        "/assets/dashboard.js".parse::<DashboardEndpoint>(),
        Ok(DashboardEndpoint::Asset("dashboard.js".to_string()))
    );
}

#[test]
fn unknown_routes_are_rejected() {
    assert!("/api".parse::<DashboardEndpoint>().is_err());
    assert!("/api/stats/".parse::<DashboardEndpoint>().is_err());
    assert!("/admin".parse::<DashboardEndpoint>().is_err());
}

#[test]
fn asset_paths_cannot_escape_or_nest() {
    assert!("/assets/".parse::<DashboardEndpoint>().is_err());
    assert!("/assets/../Cargo.toml".parse::<DashboardEndpoint>().is_err());
    assert!("/assets/a/b.js".parse::<DashboardEndpoint>().is_err());
}

#[test]
fn index_maps_to_index_asset() {
    assert_eq!(DashboardEndpoint::Index.asset_name(), Some("index.html"));
    assert_eq!(DashboardEndpoint::Stats.asset_name(), None);
}
