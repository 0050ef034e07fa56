mod import;
mod session;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use reqwest::header::{COOKIE, HeaderValue};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing username; pass --username or set VOCAB_USERNAME")]
    MissingUsername,
    #[error("login rejected with HTTP {0}")]
    LoginRejected(u16),
    #[error("login response did not set a session cookie")]
    MissingSessionCookie,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error(transparent)]
    Import(#[from] import::ImportError),
    #[error("{path}: {message}")]
    File { path: String, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("expected a JSON response, got: {0}")]
    UnexpectedBody(String),
}

#[derive(Parser, Debug)]
#[command(name = "vocab-cli", about = "Vocabulary trainer backend CLI")]
struct Cli {
    #[arg(long, env = "VOCAB_BASE_URL", default_value = "http://127.0.0.1:5000")]
    base_url: String,

    #[arg(long, env = "VOCAB_USERNAME")]
    username: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upload words from a JSON file or `english,french` lines.
    Import { file: PathBuf },
    /// List the words the backend hands out, optionally for one color.
    Words {
        #[arg(long, value_enum)]
        color: Option<Color>,
    },
    /// Show the per-color totals.
    Counts,
    /// Check a French translation.
    Check { english: String, french: String },
    /// Set the color status of a word.
    Color {
        english: String,
        #[arg(value_enum)]
        color: Color,
    },
    /// Download the pronunciation audio for a word.
    Audio {
        english: String,
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Color {
    Red,
    Amber,
    Green,
    Gray,
}

impl Color {
    fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Amber => "amber",
            Self::Green => "green",
            Self::Gray => "gray",
        }
    }
}

/// HTTP client bound to one backend and, after `login`, one session.
struct Backend {
    http: reqwest::Client,
    base_url: String,
    cookie: Option<HeaderValue>,
}

impl Backend {
    fn new(base_url: &str) -> Result<Self, CliError> {
        let http = reqwest::Client::builder().redirect(reqwest::redirect::Policy::none()).build()?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned(), cookie: None })
    }

    async fn login(&mut self, username: Option<&str>) -> Result<(), CliError> {
        let username = username.map(str::trim).filter(|u| !u.is_empty()).ok_or(CliError::MissingUsername)?;
        let response = self
            .http
            .post(format!("{}/login", self.base_url))
            .form(&[("username", username)])
            .send()
            .await?;

        let status = response.status();
        if !(status.is_success() || status.is_redirection()) {
            return Err(CliError::LoginRejected(status.as_u16()));
        }
        let cookie = session::cookie_header(response.headers()).ok_or(CliError::MissingSessionCookie)?;
        self.cookie = Some(HeaderValue::from_str(&cookie)?);
        Ok(())
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let request = self.http.request(method, format!("{}{path}", self.base_url));
        match &self.cookie {
            Some(cookie) => request.header(COOKIE, cookie.clone()),
            None => request,
        }
    }

    async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, CliError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CliError::ServerError { status: status.as_u16(), message });
        }
        Ok(response)
    }

    async fn send_json(request: reqwest::RequestBuilder) -> Result<Value, CliError> {
        let body = Self::send(request).await?.text().await?;
        parse_json_body(&body)
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let mut backend = Backend::new(&cli.base_url)?;

    if !matches!(cli.command, Command::Import { .. }) {
        backend.login(cli.username.as_deref()).await?;
    }

    match cli.command {
        Command::Import { file } => run_import(&backend, &file).await,
        Command::Words { color } => {
            let mut request = backend.request(reqwest::Method::GET, "/api/get_random_words");
            if let Some(color) = color {
                request = request.query(&[("color", color.as_str())]);
            }
            print_json(&Backend::send_json(request).await?)
        }
        Command::Counts => {
            let request = backend.request(reqwest::Method::GET, "/api/get_color_counts");
            print_json(&Backend::send_json(request).await?)
        }
        Command::Check { english, french } => {
            let request = backend
                .request(reqwest::Method::POST, "/api/check_answer")
                .json(&serde_json::json!({ "english": english, "french": french }));
            let verdict = Backend::send_json(request).await?;
            println!("{}", describe_check(&verdict));
            Ok(())
        }
        Command::Color { english, color } => {
            let request = backend
                .request(reqwest::Method::POST, "/api/update_color")
                .json(&serde_json::json!({ "english": english, "color": color.as_str() }));
            Backend::send(request).await?;
            println!("{english}: {}", color.as_str());
            Ok(())
        }
        Command::Audio { english, out } => {
            let request = backend.request(reqwest::Method::GET, "/api/play_audio").query(&[("english", english.as_str())]);
            let bytes = Backend::send(request).await?.bytes().await?;
            tokio::fs::write(&out, &bytes).await.map_err(|error| file_error(&out, &error))?;
            println!("wrote {} bytes to {}", bytes.len(), out.display());
            Ok(())
        }
    }
}

async fn run_import(backend: &Backend, file: &Path) -> Result<(), CliError> {
    let contents = tokio::fs::read_to_string(file).await.map_err(|error| file_error(file, &error))?;
    let words = import::parse_words(&contents)?;
    eprintln!("uploading {} words", words.len());

    let request = backend
        .request(reqwest::Method::POST, "/api/add_vocab_bulk")
        .json(&import::BulkRequest { words: &words });
    print_json(&Backend::send_json(request).await?)
}

/// Longest body excerpt quoted in an `UnexpectedBody` error.
const BODY_EXCERPT_CHARS: usize = 120;

fn parse_json_body(body: &str) -> Result<Value, CliError> {
    serde_json::from_str(body).map_err(|_| {
        let excerpt: String = body.trim().chars().take(BODY_EXCERPT_CHARS).collect();
        CliError::UnexpectedBody(excerpt)
    })
}

fn file_error(path: &Path, error: &std::io::Error) -> CliError {
    CliError::File { path: path.display().to_string(), message: error.to_string() }
}

/// Render a `check_answer` response as one line.
fn describe_check(verdict: &Value) -> String {
    if verdict.get("correct").and_then(Value::as_bool).unwrap_or(false) {
        return "correct".to_owned();
    }
    match verdict.get("correct_answer").and_then(Value::as_str) {
        Some(answer) => format!("incorrect (correct: {answer})"),
        None => "incorrect".to_owned(),
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
