use game24_client::{
    CanonicalQuery, CliConfig, DeploymentContext, EndpointBase, Solver, SolverClient,
};
use httpmock::prelude::*;

fn client_from_cli(server: &MockServer) -> SolverClient {
    let config = CliConfig {
        numbers: "1,2,3,4".to_string(),
        endpoint: Some(server.url("/game24/solve/")),
        extension: false,
        verbose: false,
    };
    SolverClient::new(config.endpoint_base())
}

#[tokio::test]
async fn test_end_to_end_solve_with_real_http() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/game24/solve/1,2,3,4/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "input": [1, 2, 3, 4],
                "solution_count": 2,
                "solutions": ["(1+2+3)*4", "1*2*3*4"]
            }));
    });

    let client = client_from_cli(&server);
    let solutions = client.solve("1,2,3,4").await;

    api_mock.assert();
    assert_eq!(solutions, vec!["(1+2+3)*4", "1*2*3*4"]);
}

#[tokio::test]
async fn test_end_to_end_dispatch_target_has_single_separator_and_trailing_slash() {
    // The base handed over by the mock server already ends with a slash;
    // the dispatched path must still contain exactly one between base and
    // query. Exact path matching proves it.
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/game24/solve/4,3,2,1/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "solutions": ["4*3*2*1"] }));
    });

    let client = client_from_cli(&server);
    let solutions = client.solve("4  3,2\t1").await;

    api_mock.assert();
    assert_eq!(solutions, vec!["4*3*2*1"]);
}

#[tokio::test]
async fn test_end_to_end_degenerate_input_issues_no_request() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200)
            .json_body(serde_json::json!({ "solutions": [] }));
    });

    let client = client_from_cli(&server);
    for raw in ["", ", ,", "   ", ",", "abc def"] {
        assert!(client.solve(raw).await.is_empty());
    }

    assert_eq!(api_mock.hits(), 0);
}

#[tokio::test]
async fn test_end_to_end_with_api_failure() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/game24/solve/1,2,3,4/");
        then.status(404).body("deliberate 404 error");
    });

    let client = client_from_cli(&server);
    let solutions = client.solve("1,2,3,4").await;

    api_mock.assert();
    assert!(solutions.is_empty());
}

#[tokio::test]
async fn test_end_to_end_with_malformed_payload() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/game24/solve/1,2,3,4/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "data": "wrong_key" }));
    });

    let client = client_from_cli(&server);
    let solutions = client.solve("1,2,3,4").await;

    api_mock.assert();
    assert!(solutions.is_empty());
}

#[tokio::test]
async fn test_solve_through_port_trait() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/game24/solve/6,6,6,6/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "solutions": ["6+6+6+6"] }));
    });

    let solver: Box<dyn Solver> = Box::new(client_from_cli(&server));
    assert_eq!(solver.solve("6 6 6 6").await, vec!["6+6+6+6"]);
}

#[test]
fn test_environment_marker_controls_endpoint_base() {
    std::env::remove_var("GAME24_EXTENSION_ID");
    let hosted = EndpointBase::resolve(DeploymentContext::detect());
    assert_eq!(hosted.as_str(), "/game24/solve/");

    std::env::set_var("GAME24_EXTENSION_ID", "pkmbcjioniornhlcmjlgcmjmeodwobjc");
    let packaged = EndpointBase::resolve(DeploymentContext::detect());
    assert_eq!(
        packaged.as_str(),
        "https://game24.flamebots.org/game24/solve/"
    );
    std::env::remove_var("GAME24_EXTENSION_ID");

    let query = CanonicalQuery::parse("1,2,3,4").unwrap();
    assert_eq!(hosted.join(&query), "/game24/solve/1,2,3,4/");
    assert_eq!(
        packaged.join(&query),
        "https://game24.flamebots.org/game24/solve/1,2,3,4/"
    );
}
