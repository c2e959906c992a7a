use crate::types::{Disposition, ProbeOutcome, Scheme};
use reqwest::{Client, Url};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ProbeUrlError {
    #[error("invalid probe target {0}")]
    InvalidTarget(String),
}

pub fn target_url(scheme: Scheme, domain: &str) -> Result<Url, ProbeUrlError> {
    let raw = format!("{}://{}", scheme, domain);
    Url::parse(&raw).map_err(|e| ProbeUrlError::InvalidTarget(format!("{}: {}", raw, e)))
}

/// One bounded-time reachability attempt. Issues a HEAD request (no body is
/// ever read), follows redirects, and captures every failure mode into the
/// outcome. The deadline is enforced on top of the client-level timeout, so
/// a stalled attempt is cancelled rather than left hanging.
pub async fn probe(client: &Client, scheme: Scheme, url: Url, timeout: Duration) -> ProbeOutcome {
    let requested = url.clone();
    let started = Instant::now();

    let result = tokio::time::timeout(timeout, client.head(url).send()).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    let disposition = match result {
        Ok(Ok(response)) => {
            let status = response.status();
            let final_url = response.url().clone();
            debug!(
                url = %requested,
                code = status.as_u16(),
                elapsed_ms,
                "probe response"
            );
            Disposition::Response {
                status_code: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                redirected: final_url != requested,
                final_url: final_url.to_string(),
            }
        }
        Ok(Err(e)) => {
            debug!(url = %requested, error = %e, elapsed_ms, "probe failed");
            Disposition::Failed {
                error: describe_failure(&e),
            }
        }
        Err(_) => Disposition::Failed {
            error: format!("timed out after {}ms", timeout.as_millis()),
        },
    };

    ProbeOutcome {
        scheme,
        elapsed_ms,
        disposition,
    }
}

fn describe_failure(error: &reqwest::Error) -> String {
    let raw = error.to_string();
    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_redirect() {
        "too many redirects".to_string()
    } else if error.is_connect() {
        if raw.contains("dns") {
            "could not resolve host".to_string()
        } else if raw.contains("certificate") || raw.contains("tls") || raw.contains("ssl") {
            "TLS handshake failed".to_string()
        } else {
            "connection failed".to_string()
        }
    } else if raw.contains("certificate") || raw.contains("tls") || raw.contains("ssl") {
        "TLS handshake failed".to_string()
    } else {
        raw
    }
}
