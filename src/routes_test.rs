use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn base_routes_build_for_any_site_root() {
    let _router = base_routes(std::path::Path::new("target/site"));
}
