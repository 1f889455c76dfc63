use serde_json::json;
use termoj_webclient::*;

mod scripted;

#[tokio::test]
async fn no_token_no_bearer() {
    let (t, cli) = scripted::client();
    t.reply_json(json!({"username": "anon"}));

    assert!(!cli.has_token());
    cli.get_profile().await.unwrap();
    assert_eq!(t.last_request().unwrap().bearer, None);
}

#[tokio::test]
async fn token_update_reaches_every_resource_client() {
    let (t, cli) = scripted::client();
    cli.set_token("first");
    assert_eq!(cli.token().as_deref(), Some("first"));

    t.reply_json(json!({"username": "alice"}))
        .reply_json(json!({"id": 1, "name": "C"}))
        .reply(204, "")
        .reply_json(json!({"submissions": []}))
        .reply_json(json!({"id": 2, "title": "P"}));

    cli.get_profile().await.unwrap();
    cli.set_token("second");
    cli.get_course(1).await.unwrap();
    cli.join_problemset(1).await.unwrap();
    cli.clear_token();
    cli.get_submissions(&SubmissionFilter::default()).await.unwrap();
    cli.set_token("third");
    cli.get_problem(2).await.unwrap();

    let bearers: Vec<_> = t.requests().into_iter().map(|r| r.bearer).collect();
    assert_eq!(
        bearers,
        vec![
            Some("first".to_owned()),
            Some("second".to_owned()),
            Some("second".to_owned()),
            None,
            Some("third".to_owned()),
        ]
    );
}

#[tokio::test]
async fn clones_share_the_token() {
    let (t, cli) = scripted::client();
    let other = cli.clone().with_token("shared");
    assert_eq!(cli.token().as_deref(), Some("shared"));

    t.reply_json(json!({"username": "bob"}));
    cli.user().profile().await.unwrap();
    assert_eq!(t.last_request().unwrap().bearer.as_deref(), Some("shared"));

    other.clear_token();
    assert!(!cli.has_token());
}

#[tokio::test]
async fn every_endpoint_maps_401() {
    let (t, cli) = scripted::client();
    for _ in 0..8 {
        t.reply(401, "");
    }

    let results: Vec<Result<()>> = vec![
        cli.get_profile().await.map(drop),
        cli.get_courses(&CourseFilter::default()).await.map(drop),
        cli.get_course(1).await.map(drop),
        cli.get_problem(1).await.map(drop),
        cli.get_problemset(1).await.map(drop),
        cli.get_submission(1).await.map(drop),
        cli.quit_course(1).await,
        cli.get_user_problemsets().await.map(drop),
    ];
    for res in results {
        assert!(matches!(res, Err(Error::AuthenticationRequired { .. })), "{:?}", res);
    }
    assert_eq!(t.pending_replies(), 0);
}
