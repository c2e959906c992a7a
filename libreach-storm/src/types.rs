use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Https,
    Http,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Https => "https",
            Scheme::Http => "http",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What one protocol attempt produced. Exactly one variant holds per attempt:
/// either a response arrived (any status) or the attempt failed before one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    Response {
        status_code: u16,
        status_text: String,
        redirected: bool,
        final_url: String,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub scheme: Scheme,
    pub elapsed_ms: u64,
    pub disposition: Disposition,
}

impl ProbeOutcome {
    /// A response was obtained and its status is in the 2xx range.
    pub fn is_reachable(&self) -> bool {
        matches!(
            self.disposition,
            Disposition::Response { status_code, .. } if (200..=299).contains(&status_code)
        )
    }

    pub fn is_redirected(&self) -> bool {
        matches!(
            self.disposition,
            Disposition::Response {
                redirected: true,
                ..
            }
        )
    }

    pub fn status_code(&self) -> Option<u16> {
        match &self.disposition {
            Disposition::Response { status_code, .. } => Some(*status_code),
            Disposition::Failed { .. } => None,
        }
    }

    pub fn status_text(&self) -> Option<&str> {
        match &self.disposition {
            Disposition::Response { status_text, .. } => Some(status_text),
            Disposition::Failed { .. } => None,
        }
    }

    pub fn final_url(&self) -> Option<&str> {
        match &self.disposition {
            Disposition::Response { final_url, .. } => Some(final_url),
            Disposition::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.disposition {
            Disposition::Response { .. } => None,
            Disposition::Failed { error } => Some(error),
        }
    }
}

/// Per-domain verdict. `Faulted` means the resolution itself broke (e.g. the
/// probe URL could not be constructed), not that both probes failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Reachable { scheme: Scheme },
    Unreachable,
    Faulted { reason: String },
}

impl Verdict {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Verdict::Reachable { .. })
    }

    pub fn scheme(&self) -> Option<Scheme> {
        match self {
            Verdict::Reachable { scheme } => Some(*scheme),
            _ => None,
        }
    }
}

/// Unified record for one domain, finalized once and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainResult {
    pub domain: String,
    pub verdict: Verdict,
    pub https: Option<ProbeOutcome>,
    pub http: Option<ProbeOutcome>,
    pub checked_at: DateTime<Utc>,
}

impl DomainResult {
    pub fn outcome(&self, scheme: Scheme) -> Option<&ProbeOutcome> {
        match scheme {
            Scheme::Https => self.https.as_ref(),
            Scheme::Http => self.http.as_ref(),
        }
    }

    /// The outcome selected by the preference policy, when one exists.
    pub fn best(&self) -> Option<&ProbeOutcome> {
        self.verdict.scheme().and_then(|s| self.outcome(s))
    }

    /// Reachable and serving directly, with no redirect hop.
    pub fn is_clean(&self) -> bool {
        self.best().is_some_and(|o| !o.is_redirected())
    }
}

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub timeout: Duration,
    pub batch_size: usize,
    pub inter_batch_pause: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            batch_size: 5,
            inter_batch_pause: Duration::from_millis(200),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

#[derive(Debug, Clone)]
pub enum BatchEvent {
    /// A group is about to start probing (emitted after the inter-group pause).
    GroupStarted { domains: Vec<String> },
    /// Every member of a group resolved. Results arrive in completion order.
    GroupCompleted {
        results: Vec<DomainResult>,
        progress: Progress,
    },
}

/// Scheduler-owned accumulation of a batch run. Mutated only at group
/// boundaries; derived counts are recomputed from `results` on demand.
#[derive(Debug, Clone)]
pub struct BatchState {
    pub total_domains: usize,
    pub completed_domains: usize,
    pub results: Vec<DomainResult>,
    pub running: bool,
}

impl BatchState {
    pub fn start(total_domains: usize) -> Self {
        Self {
            total_domains,
            completed_domains: 0,
            results: Vec::new(),
            running: true,
        }
    }

    /// Fold one scheduler event into the state. `completed_domains` never
    /// decreases and results are only appended.
    pub fn absorb(&mut self, event: BatchEvent) {
        if let BatchEvent::GroupCompleted { results, progress } = event {
            self.results.extend(results);
            self.completed_domains = self.completed_domains.max(progress.completed);
        }
    }

    pub fn finish(&mut self) {
        self.running = false;
    }

    pub fn reachable_count(&self) -> usize {
        crate::report::reachable_count(&self.results)
    }

    pub fn unreachable_count(&self) -> usize {
        crate::report::unreachable_count(&self.results)
    }

    pub fn clean_subset(&self) -> Vec<&DomainResult> {
        crate::report::clean_subset(&self.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(scheme: Scheme, status_code: u16, redirected: bool) -> ProbeOutcome {
        ProbeOutcome {
            scheme,
            elapsed_ms: 42,
            disposition: Disposition::Response {
                status_code,
                status_text: String::new(),
                redirected,
                final_url: format!("{}://example.com/", scheme),
            },
        }
    }

    #[test]
    fn reachable_requires_success_status() {
        assert!(response(Scheme::Https, 200, false).is_reachable());
        assert!(response(Scheme::Https, 204, false).is_reachable());
        assert!(!response(Scheme::Https, 301, false).is_reachable());
        assert!(!response(Scheme::Https, 404, false).is_reachable());
        assert!(!response(Scheme::Https, 500, false).is_reachable());
    }

    #[test]
    fn failed_outcome_has_error_and_no_status() {
        let failed = ProbeOutcome {
            scheme: Scheme::Http,
            elapsed_ms: 10,
            disposition: Disposition::Failed {
                error: "connection failed".to_string(),
            },
        };
        assert!(!failed.is_reachable());
        assert_eq!(failed.status_code(), None);
        assert_eq!(failed.error(), Some("connection failed"));
    }

    #[test]
    fn best_follows_verdict_scheme() {
        let result = DomainResult {
            domain: "example.com".to_string(),
            verdict: Verdict::Reachable {
                scheme: Scheme::Https,
            },
            https: Some(response(Scheme::Https, 200, false)),
            http: Some(response(Scheme::Http, 200, true)),
            checked_at: Utc::now(),
        };
        let best = result.best().unwrap();
        assert_eq!(best.scheme, Scheme::Https);
        assert!(result.is_clean());
    }

    #[test]
    fn redirected_best_is_not_clean() {
        let result = DomainResult {
            domain: "old.example.com".to_string(),
            verdict: Verdict::Reachable {
                scheme: Scheme::Https,
            },
            https: Some(response(Scheme::Https, 200, true)),
            http: None,
            checked_at: Utc::now(),
        };
        assert!(result.verdict.is_reachable());
        assert!(!result.is_clean());
    }

    #[test]
    fn batch_state_absorbs_groups_monotonically() {
        let mut state = BatchState::start(4);
        assert!(state.running);

        state.absorb(BatchEvent::GroupStarted {
            domains: vec!["a.com".to_string()],
        });
        assert_eq!(state.completed_domains, 0);
        assert!(state.results.is_empty());

        state.absorb(BatchEvent::GroupCompleted {
            results: vec![],
            progress: Progress {
                completed: 2,
                total: 4,
            },
        });
        assert_eq!(state.completed_domains, 2);

        state.finish();
        assert!(!state.running);
    }
}
