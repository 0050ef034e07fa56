use super::*;

#[test]
fn describe_check_correct() {
    assert_eq!(describe_check(&serde_json::json!({"correct": true})), "correct");
}

#[test]
fn describe_check_incorrect_with_answer() {
    let verdict = serde_json::json!({"correct": false, "correct_answer": "chat"});
    assert_eq!(describe_check(&verdict), "incorrect (correct: chat)");
}

#[test]
fn describe_check_incorrect_without_answer() {
    assert_eq!(describe_check(&serde_json::json!({"correct": false})), "incorrect");
}

#[test]
fn parse_json_body_accepts_json() {
    assert_eq!(parse_json_body(r#"{"correct":true}"#).unwrap(), serde_json::json!({"correct": true}));
}

#[test]
fn parse_json_body_rejects_html_and_empty() {
    match parse_json_body("<html>session expired</html>") {
        Err(CliError::UnexpectedBody(excerpt)) => assert_eq!(excerpt, "<html>session expired</html>"),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(matches!(parse_json_body(""), Err(CliError::UnexpectedBody(_))));
}

#[test]
fn parse_json_body_truncates_long_excerpts() {
    let body = "x".repeat(1000);
    match parse_json_body(&body) {
        Err(CliError::UnexpectedBody(excerpt)) => assert_eq!(excerpt.len(), BODY_EXCERPT_CHARS),
        other => panic!("unexpected result: {other:?}"),
    }
}

/// Serve one canned raw HTTP response on an ephemeral port.
async fn serve_once(body: &'static str, content_type: &'static str) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0_u8; 4096];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn send_json_rejects_non_json_success_body() {
    let base_url = serve_once("<html>session expired</html>", "text/html").await;
    let backend = Backend::new(&base_url).unwrap();
    let request = backend.request(reqwest::Method::POST, "/api/check_answer");
    let result = Backend::send_json(request).await;
    assert!(matches!(result, Err(CliError::UnexpectedBody(_))), "got {result:?}");
}

#[tokio::test]
async fn send_json_returns_json_success_body() {
    let base_url = serve_once(r#"{"correct":false,"correct_answer":"chat"}"#, "application/json").await;
    let backend = Backend::new(&base_url).unwrap();
    let request = backend.request(reqwest::Method::POST, "/api/check_answer");
    let verdict = Backend::send_json(request).await.unwrap();
    assert_eq!(describe_check(&verdict), "incorrect (correct: chat)");
}

#[test]
fn color_wire_names() {
    let names: Vec<&str> = [Color::Red, Color::Amber, Color::Green, Color::Gray].into_iter().map(Color::as_str).collect();
    assert_eq!(names, ["red", "amber", "green", "gray"]);
}

#[test]
fn parses_color_subcommand() {
    let cli = Cli::try_parse_from(["vocab-cli", "--username", "alice", "color", "cat", "amber"]).unwrap();
    assert_eq!(cli.username.as_deref(), Some("alice"));
    match cli.command {
        Command::Color { english, color } => {
            assert_eq!(english, "cat");
            assert_eq!(color, Color::Amber);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn rejects_unknown_color() {
    assert!(Cli::try_parse_from(["vocab-cli", "color", "cat", "purple"]).is_err());
}

#[test]
fn audio_requires_out_path() {
    assert!(Cli::try_parse_from(["vocab-cli", "audio", "cat"]).is_err());
    let cli = Cli::try_parse_from(["vocab-cli", "audio", "cat", "--out", "cat.mp3"]).unwrap();
    assert!(matches!(cli.command, Command::Audio { ref out, .. } if out == &PathBuf::from("cat.mp3")));
}

#[test]
fn backend_trims_trailing_slash() {
    let backend = Backend::new("http://127.0.0.1:5000/").unwrap();
    assert_eq!(backend.base_url, "http://127.0.0.1:5000");
    assert!(backend.cookie.is_none());
}

#[tokio::test]
async fn login_requires_username() {
    let mut backend = Backend::new("http://127.0.0.1:9").unwrap();
    assert!(matches!(backend.login(None).await, Err(CliError::MissingUsername)));
    assert!(matches!(backend.login(Some("   ")).await, Err(CliError::MissingUsername)));
}
