use forkify::api::RecipeApi;
use forkify::{Config, ForkifyClient, ForkifyError, Ingredient};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serves one connection. Returns the request head once the reply is written.
async fn serve_once(status: &'static str, body: &'static str, stall: Duration) -> (SocketAddr, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut head = Vec::new();
        let mut buf = [0_u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.expect("read request");
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }

        tokio::time::sleep(stall).await;

        let reply = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        // The client may already have given up.
        let _ = socket.write_all(reply.as_bytes()).await;
        let _ = socket.shutdown().await;
        String::from_utf8_lossy(&head).into_owned()
    });

    (addr, handle)
}

fn client(addr: SocketAddr, timeout_secs: u64) -> ForkifyClient {
    let config = Config {
        api_url: format!("http://{addr}/api/v2/recipes/"),
        api_key: Some("k-1".to_string()),
        timeout_secs,
        ..Config::default()
    };
    ForkifyClient::new(&config).expect("client")
}

#[tokio::test]
async fn error_status_carries_api_message_and_code() {
    let (addr, server) = serve_once(
        "400 Bad Request",
        r#"{"status":"fail","message":"Invalid _id: abc"}"#,
        Duration::ZERO,
    )
    .await;

    let err = client(addr, 5).fetch_recipe("abc").await.unwrap_err();

    assert!(matches!(&err, ForkifyError::Fetch(m) if m == "Invalid _id: abc (400)"), "{err:?}");
    let head = server.await.unwrap();
    assert!(head.starts_with("GET /api/v2/recipes/abc?key=k-1 "), "{head}");
}

#[tokio::test]
async fn error_status_without_body_uses_reason_phrase() {
    let (addr, _server) = serve_once("404 Not Found", "", Duration::ZERO).await;

    let err = client(addr, 5).fetch_recipe("missing").await.unwrap_err();

    assert!(matches!(&err, ForkifyError::Fetch(m) if m == "Not Found (404)"), "{err:?}");
}

#[tokio::test]
async fn recipe_envelope_is_decoded() {
    let (addr, _server) = serve_once(
        "200 OK",
        r#"{"status":"success","data":{"recipe":{
            "id":"5ed6604591c37cdc054bc886","title":"Pizza","publisher":"Closet Cooking",
            "source_url":"http://example.com/pizza","image_url":"http://example.com/pizza.jpg",
            "servings":4,"cooking_time":45,
            "ingredients":[{"quantity":2,"unit":"kg","description":"flour"},
                           {"quantity":null,"unit":"","description":"salt"}]}}}"#,
        Duration::ZERO,
    )
    .await;

    let recipe = client(addr, 5).fetch_recipe("5ed6604591c37cdc054bc886").await.unwrap();

    assert_eq!(recipe.title, "Pizza");
    assert_eq!(recipe.servings, 4);
    assert_eq!(recipe.cooking_time, 45);
    assert_eq!(
        recipe.ingredients,
        vec![Ingredient::new(Some(2.0), "kg", "flour"), Ingredient::new(None, "", "salt")]
    );
    assert!(!recipe.bookmarked);
    assert!(recipe.key.is_none());
}

#[tokio::test]
async fn search_envelope_is_decoded_in_order() {
    let (addr, server) = serve_once(
        "200 OK",
        r#"{"status":"success","results":2,"data":{"recipes":[
            {"id":"a","title":"Pizza A","publisher":"P","image_url":"a.jpg"},
            {"id":"b","title":"Pizza B","publisher":"P","image_url":"b.jpg","key":"user-key"}]}}"#,
        Duration::ZERO,
    )
    .await;

    let results = client(addr, 5).search_recipes("pizza").await.unwrap();

    let ids: Vec<_> = results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
    assert_eq!(results[1].key.as_deref(), Some("user-key"));
    let head = server.await.unwrap();
    assert!(head.starts_with("GET /api/v2/recipes/?search=pizza&key=k-1 "), "{head}");
}

#[tokio::test]
async fn malformed_success_body_is_a_fetch_error() {
    let (addr, _server) = serve_once("200 OK", r#"{"status":"success"}"#, Duration::ZERO).await;

    let err = client(addr, 5).search_recipes("pizza").await.unwrap_err();

    assert!(matches!(err, ForkifyError::Fetch(_)), "{err:?}");
}

#[tokio::test]
async fn stalled_server_times_out() {
    let (addr, _server) = serve_once("200 OK", "{}", Duration::from_millis(2500)).await;

    let err = client(addr, 1).fetch_recipe("slow").await.unwrap_err();

    assert!(matches!(err, ForkifyError::Timeout(1)), "{err:?}");
}
