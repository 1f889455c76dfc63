use serde_json::json;
use termoj_webclient::http::Method;
use termoj_webclient::*;

mod scripted;
use scripted::query;

#[tokio::test]
async fn get_problem_ok() {
    let (t, cli) = scripted::client();
    t.reply_json(json!({
        "id": 1000,
        "title": "A+B Problem",
        "description": "Calculate $a+b$.",
        "input": "Two integers",
        "output": "Their sum",
        "examples": [
            {"name": "1", "input": "1 2", "output": "3", "description": "simple"}
        ],
        "data_range": "$|a|, |b| \\le 10^9$",
        "languages_accepted": ["cpp", "python", "java"],
        "allow_public_submissions": true
    }));

    let problem = cli.get_problem(1000).await.unwrap();

    assert_eq!(problem.title, "A+B Problem");
    assert_eq!(problem.examples.len(), 1);
    assert_eq!(problem.examples[0].output.as_deref(), Some("3"));
    assert!(problem.accepts(Language::Java));
    assert!(!problem.accepts(Language::Verilog));
    assert_eq!(problem.allow_public_submissions, Some(true));
    assert_eq!(t.last_request().unwrap().path, "/problem/1000");
}

#[tokio::test]
async fn get_problem_legacy_example_fields() {
    let (t, cli) = scripted::client();
    t.reply_json(json!({
        "id": 1,
        "title": "Old Problem",
        "example_input": "1",
        "example_output": "2"
    }));

    let problem = cli.get_problem(1).await.unwrap();
    assert!(problem.description.is_absent());
    assert!(problem.examples.is_empty());

    let examples = problem.all_examples();
    assert_eq!(examples.len(), 1);
    assert_eq!(examples[0].input.as_deref(), Some("1"));
}

#[tokio::test]
async fn list_problems_with_cursor() {
    let (t, cli) = scripted::client();
    t.reply_json(json!({
        "problems": [
            {"id": 1000, "title": "A+B"},
            {"id": 1001, "title": null}
        ],
        "next": "https://acm.sjtu.edu.cn/OnlineJudge/api/v1/problem/?problemset_id=3&cursor=1001"
    }));

    let filter = ProblemFilter {
        problemset_id: Some(3),
        ..Default::default()
    };
    let page = cli.get_problems(&filter).await.unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[1].title, None);
    assert_eq!(page.next_cursor.as_deref(), Some("1001"));

    let req = t.last_request().unwrap();
    assert_eq!(req.path, "/problem/");
    assert_eq!(req.query, query(&[("problemset_id", "3")]));

    // Feed the cursor back:
    t.reply_json(json!({"problems": []}));
    let page = cli
        .get_problems(&filter.with_cursor(page.next_cursor))
        .await
        .unwrap();
    assert!(page.is_last());
    assert_eq!(
        t.last_request().unwrap().query,
        query(&[("problemset_id", "3"), ("cursor", "1001")])
    );
}

#[tokio::test]
async fn submit_solution_sends_exact_form() {
    let (t, cli) = scripted::client();
    t.reply_json(json!({"id": 42, "language": "python", "public": true}));

    let code = "print(sum(map(int, input().split())))\n";
    let solution = Solution::new(Language::Python, code).public(true);
    let submission = cli.submit_solution(1000, &solution).await.unwrap();

    assert_eq!(submission.id, 42);
    assert_eq!(submission.language, Some(Language::Python));
    assert_eq!(submission.public, Some(true));
    assert_eq!(submission.status, None);

    let req = t.last_request().unwrap();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.path, "/problem/1000/submit");
    assert_eq!(
        req.form,
        Some(json!({"language": "python", "code": code, "public": true}))
    );
}

#[tokio::test]
async fn submit_solution_defaults_to_private() {
    let (t, cli) = scripted::client();
    t.reply_json(json!({"id": 7}));

    let submission = cli
        .submit_solution(1, &Solution::new(Language::Cpp, "int main(){}"))
        .await
        .unwrap();
    assert_eq!(submission.id, 7);
    assert!(!submission.is_finished());

    let form = t.last_request().unwrap().form.unwrap();
    assert_eq!(form["public"], json!(false));
    assert_eq!(form["language"], json!("cpp"));
}

#[tokio::test]
async fn submit_solution_forbidden() {
    let (t, cli) = scripted::client();
    t.reply(403, r#"{"message": "problemset closed"}"#);

    let err = cli
        .submit_solution(1, &Solution::new(Language::Cpp, "int main(){}"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::PermissionDenied { .. }), "got {:?}", err);
}

#[tokio::test]
async fn get_problem_malformed_json() {
    let (t, cli) = scripted::client();
    t.reply(200, "<!doctype html><title>maintenance</title>");

    let err = cli.get_problem(1).await.unwrap_err();
    match err {
        Error::MalformedResponse { ref body, .. } => assert!(body.starts_with("<!doctype")),
        _ => panic!("Want MalformedResponse, but got {:?}", err),
    }
}
