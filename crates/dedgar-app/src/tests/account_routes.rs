use axum::http::{StatusCode, header::SET_COOKIE};

use super::TestSite;

fn session_cookie(response: &super::Response) -> String {
    let header = response.headers[SET_COOKIE].to_str().unwrap();
    header.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn register_then_me_then_logout() {
    let site = TestSite::new();

    let registered = site
        .post_form("/register", "name=shinobu&password=correct+horse", None)
        .await;
    assert_eq!(registered.status, StatusCode::OK);
    assert_eq!(registered.json()["name"], "shinobu");
    let cookie = session_cookie(&registered);
    assert!(cookie.starts_with("dedgar_session="));

    let me = site
        .send(
            axum::http::Request::get("/me")
                .header("cookie", &cookie)
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.json()["name"], "shinobu");

    let logout = site.post_form("/logout", "", Some(&cookie)).await;
    assert_eq!(logout.status, StatusCode::NO_CONTENT);
    assert!(logout.headers[SET_COOKIE].to_str().unwrap().contains("Max-Age=0"));
    assert_eq!(site.state.sessions.len().await, 0);
}

#[tokio::test]
async fn login_checks_password() {
    let site = TestSite::new();
    site.post_form("/register", "name=shinobu&password=correct+horse", None)
        .await;

    let wrong = site
        .post_form("/login", "name=shinobu&password=battery+staple", None)
        .await;
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);

    let right = site
        .post_form("/login", "name=shinobu&password=correct+horse", None)
        .await;
    assert_eq!(right.status, StatusCode::OK);
    assert!(right.headers.contains_key(SET_COOKIE));
}

#[tokio::test]
async fn registration_validates_input() {
    let site = TestSite::new();

    let short = site.post_form("/register", "name=shinobu&password=short", None).await;
    assert_eq!(short.status, StatusCode::BAD_REQUEST);

    let blank = site
        .post_form("/register", "name=+&password=long+enough+pw", None)
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);

    site.post_form("/register", "name=shinobu&password=correct+horse", None)
        .await;
    let taken = site
        .post_form("/register", "name=shinobu&password=another+one", None)
        .await;
    assert_eq!(taken.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn me_without_session_is_unauthorized() {
    let site = TestSite::new();

    assert_eq!(site.get("/me").await.status, StatusCode::UNAUTHORIZED);
}
