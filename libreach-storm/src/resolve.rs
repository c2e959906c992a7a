use crate::probe::{probe, target_url};
use crate::types::{DomainResult, ProbeConfig, ProbeOutcome, Scheme, Verdict};
use chrono::Utc;
use reqwest::Client;

/// Protocol preference policy: HTTPS whenever it is reachable, regardless of
/// what HTTP returned; HTTP only as a fallback; otherwise unreachable.
pub(crate) fn select(https: &ProbeOutcome, http: &ProbeOutcome) -> Verdict {
    if https.is_reachable() {
        Verdict::Reachable {
            scheme: Scheme::Https,
        }
    } else if http.is_reachable() {
        Verdict::Reachable {
            scheme: Scheme::Http,
        }
    } else {
        Verdict::Unreachable
    }
}

/// Probes one domain over both schemes and applies the preference policy.
/// Returns `None` for a blank domain so the caller can skip it entirely.
/// Never returns an error: probe failures land in the outcomes, and a
/// request-construction fault lands in the verdict.
pub(crate) async fn resolve(
    client: &Client,
    domain: &str,
    config: &ProbeConfig,
) -> Option<DomainResult> {
    let domain = domain.trim();
    if domain.is_empty() {
        return None;
    }

    let urls = target_url(Scheme::Https, domain).and_then(|https| {
        target_url(Scheme::Http, domain).map(|http| (https, http))
    });
    let (https_url, http_url) = match urls {
        Ok(pair) => pair,
        Err(e) => {
            return Some(DomainResult {
                domain: domain.to_string(),
                verdict: Verdict::Faulted {
                    reason: e.to_string(),
                },
                https: None,
                http: None,
                checked_at: Utc::now(),
            });
        }
    };

    // The two attempts are independent; each writes only its own slot.
    let (https, http) = tokio::join!(
        probe(client, Scheme::Https, https_url, config.timeout),
        probe(client, Scheme::Http, http_url, config.timeout),
    );

    let verdict = select(&https, &http);
    Some(DomainResult {
        domain: domain.to_string(),
        verdict,
        https: Some(https),
        http: Some(http),
        checked_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Disposition;

    fn reachable(scheme: Scheme) -> ProbeOutcome {
        with_status(scheme, 200)
    }

    fn with_status(scheme: Scheme, status_code: u16) -> ProbeOutcome {
        ProbeOutcome {
            scheme,
            elapsed_ms: 5,
            disposition: Disposition::Response {
                status_code,
                status_text: String::new(),
                redirected: false,
                final_url: format!("{}://example.com/", scheme),
            },
        }
    }

    fn failed(scheme: Scheme) -> ProbeOutcome {
        ProbeOutcome {
            scheme,
            elapsed_ms: 5,
            disposition: Disposition::Failed {
                error: "connection failed".to_string(),
            },
        }
    }

    #[test]
    fn https_wins_regardless_of_http() {
        for http in [reachable(Scheme::Http), failed(Scheme::Http)] {
            let verdict = select(&reachable(Scheme::Https), &http);
            assert_eq!(
                verdict,
                Verdict::Reachable {
                    scheme: Scheme::Https
                }
            );
        }
    }

    #[test]
    fn http_is_a_fallback_only() {
        let verdict = select(&failed(Scheme::Https), &reachable(Scheme::Http));
        assert_eq!(
            verdict,
            Verdict::Reachable {
                scheme: Scheme::Http
            }
        );

        let verdict = select(&with_status(Scheme::Https, 503), &reachable(Scheme::Http));
        assert_eq!(
            verdict,
            Verdict::Reachable {
                scheme: Scheme::Http
            }
        );
    }

    #[test]
    fn both_down_is_unreachable() {
        let verdict = select(&failed(Scheme::Https), &with_status(Scheme::Http, 404));
        assert_eq!(verdict, Verdict::Unreachable);
    }

    #[tokio::test]
    async fn blank_domain_resolves_to_none() {
        let client = crate::http::create_http_pool(std::time::Duration::from_secs(1));
        let config = ProbeConfig::default();
        assert!(resolve(&client, "   ", &config).await.is_none());
        assert!(resolve(&client, "", &config).await.is_none());
    }

    #[tokio::test]
    async fn unparseable_domain_faults_without_probing() {
        let client = crate::http::create_http_pool(std::time::Duration::from_secs(1));
        let config = ProbeConfig::default();
        let result = resolve(&client, "exa mple.com", &config).await.unwrap();
        assert!(matches!(result.verdict, Verdict::Faulted { .. }));
        assert!(result.https.is_none());
        assert!(result.http.is_none());
        assert!(result.best().is_none());
    }
}
