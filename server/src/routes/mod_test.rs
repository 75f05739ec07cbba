use super::*;

#[tokio::test]
async fn healthz_reports_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn route_list_serves_landing_and_os_pages() {
    let paths: Vec<String> = generate_route_list(App)
        .iter()
        .map(|route| route.path().to_owned())
        .collect();
    assert!(paths.iter().any(|p| p == "/"), "missing landing route in {paths:?}");
    assert!(paths.iter().any(|p| p == "/os"), "missing os route in {paths:?}");
}
