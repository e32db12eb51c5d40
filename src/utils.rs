use reqwest::StatusCode;

pub const DEFAULT_BASE_URL: &str = "https://api.prosper.com/v1";

/// A non-success response from the Prosper server.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("request failed: {status}{}", message_suffix(.message))]
pub struct ServerError {
    pub status: StatusCode,
    /// Response body, folded onto a single line.
    pub message: String,
}

fn message_suffix(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(" - {}", message)
    }
}

/// Passes successful responses through and turns everything else into a
/// [`ServerError`], consuming the body for the message.
pub async fn check_status(res: reqwest::Response) -> Result<reqwest::Response, ServerError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_default();
    Err(ServerError {
        status,
        message: fold_lines(&body),
    })
}

/// Replaces every newline and the whitespace that follows it with one space.
fn fold_lines(body: &str) -> String {
    let mut folded = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\n' {
            folded.push(c);
            continue;
        }
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        folded.push(' ');
    }
    folded.trim().to_owned()
}
