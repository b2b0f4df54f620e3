use std::convert::Infallible;
use std::net::SocketAddr;

use clubfinder_api::clubs::MemberCount;
use clubfinder_api::{Client, Error};
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Method, Request, Response, Server, StatusCode};

/// Starts a server answering `GET /club/` with `status` and `body`. Every other request gets a
/// `404 Not Found`.
fn serve(status: StatusCode, body: &'static str) -> SocketAddr {
    let make_svc = make_service_fn(move |_| async move {
        Ok::<_, Infallible>(service_fn(move |req: Request<Body>| async move {
            let resp = if req.method() == &Method::GET && req.uri().path() == "/club/" {
                Response::builder().status(status).body(Body::from(body))
            } else {
                Response::builder()
                    .status(StatusCode::NOT_FOUND)
                    .body(Body::empty())
            };

            Ok::<_, Infallible>(resp.unwrap())
        }))
    });

    let server = Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0))).serve(make_svc);
    let addr = server.local_addr();

    tokio::spawn(server);

    addr
}

#[tokio::test]
async fn test_list_clubs() {
    let addr = serve(
        StatusCode::OK,
        r#"[
            {"clubName": "Chess Club", "category": "Games", "description": "", "memberCount": 12},
            {"clubName": "Debate Team", "category": "Speech", "description": "", "memberCount": 8}
        ]"#,
    );

    let client = Client::new(format!("http://{}/", addr));
    let clubs = client.clubs().list().await.unwrap();

    assert_eq!(clubs.len(), 2);
    assert_eq!(clubs[0].club_name, "Chess Club");
    assert_eq!(clubs[1].category, "Speech");
    assert_eq!(clubs[1].member_count, Some(MemberCount::from(8)));
}

#[tokio::test]
async fn test_list_clubs_empty() {
    let addr = serve(StatusCode::OK, "[]");

    let client = Client::new(format!("http://{}", addr));
    let clubs = client.clubs().list().await.unwrap();

    assert!(clubs.is_empty());
}

#[tokio::test]
async fn test_list_clubs_bad_status() {
    let addr = serve(StatusCode::INTERNAL_SERVER_ERROR, "[]");

    let client = Client::new(format!("http://{}", addr));
    let err = client.clubs().list().await.unwrap_err();

    assert!(matches!(err, Error::BadStatusCode(500)));
}

#[tokio::test]
async fn test_list_clubs_not_found() {
    let addr = serve(StatusCode::OK, "[]");

    let client = Client::new(format!("http://{}/api", addr));
    let err = client.clubs().list().await.unwrap_err();

    assert!(matches!(err, Error::BadStatusCode(404)));
}

#[tokio::test]
async fn test_list_clubs_malformed_body() {
    let addr = serve(StatusCode::OK, r#"{"clubName": "Chess Club"}"#);

    let client = Client::new(format!("http://{}", addr));
    let err = client.clubs().list().await.unwrap_err();

    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn test_list_clubs_connection_refused() {
    // Bind and drop a listener to get a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();

    let client = Client::new(format!("http://{}", addr));
    let err = client.clubs().list().await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
}

#[tokio::test]
async fn test_list_clubs_null_fields() {
    let addr = serve(
        StatusCode::OK,
        r#"[
            {"clubName": "Chess Club", "category": null, "description": null, "memberCount": 12.0},
            {"clubName": "Debate Team", "category": "Speech", "memberCount": null}
        ]"#,
    );

    let client = Client::new(format!("http://{}", addr));
    let clubs = client.clubs().list().await.unwrap();

    assert_eq!(clubs.len(), 2);
    assert_eq!(clubs[0].category, "");
    assert_eq!(clubs[0].member_count.as_ref().unwrap().to_string(), "12.0");
    assert_eq!(clubs[1].member_count, None);
}
