use super::snapshot::FormSnapshot;
use contracts::costing::{ApiErrorBody, SaveResponse};
use gloo_net::http::Request;
use std::fmt;

/// Absolute endpoint URL: the page's protocol and host, backend port 3000.
/// Without a window the path is returned as-is; nothing can send it anyway.
fn endpoint_url(path: &str) -> String {
    let Some(window) = web_sys::window() else {
        return path.to_string();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000{}", protocol, hostname, path)
}

/// Why a save attempt failed. Both variants surface as status text and are
/// recoverable by resubmitting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveError {
    /// The request never completed (connectivity, DNS, aborted).
    Transport(String),
    /// The server answered non-2xx. Carries the server-provided message when
    /// one was parseable, otherwise a generic fallback.
    Server(String),
}

impl SaveError {
    pub fn message(&self) -> &str {
        match self {
            SaveError::Transport(msg) | SaveError::Server(msg) => msg,
        }
    }
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// POST the captured snapshot to the save endpoint.
///
/// A 2xx response with an unparseable body is not an error: it degrades to
/// the empty result record so rendering still runs.
pub async fn save_costing(snapshot: &FormSnapshot) -> Result<SaveResponse, SaveError> {
    let response = Request::post(&endpoint_url("/api/save"))
        .json(snapshot)
        .map_err(|e| SaveError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| SaveError::Transport(e.to_string()))?;

    if !response.ok() {
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| "Failed to save".to_string());
        return Err(SaveError::Server(message));
    }

    Ok(response.json::<SaveResponse>().await.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_the_bare_message() {
        assert_eq!(
            SaveError::Server("invalid quantity".to_string()).to_string(),
            "invalid quantity"
        );
        assert_eq!(
            SaveError::Transport("connection refused".to_string()).to_string(),
            "connection refused"
        );
    }
}
