//! Tests against the real ACM-OJ server.
//! Run with `TERMOJ_TEST_TOKEN=<token> cargo test -- --ignored`.

use termoj_webclient::*;

use testconfig::TestConfig;

#[tokio::test]
#[ignore]
async fn live_profile_with_token() {
    let cfg = TestConfig::from_env();
    let cli = OjClient::new().with_token(cfg.termoj_test_token);

    let profile = cli.get_profile().await.unwrap();
    assert!(!profile.username.is_empty());
}

#[tokio::test]
#[ignore]
async fn live_profile_without_token() {
    let cli = OjClient::new();
    let err = cli.get_profile().await.unwrap_err();
    match err {
        Error::AuthenticationRequired { .. } => {}
        _ => panic!("Want AuthenticationRequired, but got {:?}", err),
    }
}

#[tokio::test]
#[ignore]
async fn live_course_pages_terminate() {
    let cfg = TestConfig::from_env();
    let cli = OjClient::new().with_token(cfg.termoj_test_token);

    let mut filter = CourseFilter::default();
    for _ in 0..50 {
        let page = cli.get_courses(&filter).await.unwrap();
        if page.is_last() {
            return;
        }
        filter = filter.with_cursor(page.next_cursor);
    }
    panic!("Course listing did not terminate within 50 pages");
}
