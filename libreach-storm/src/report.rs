//! Pure, stateless computations over a snapshot of accumulated results.
//! Counts are recomputed on demand so they can never drift from the
//! underlying collection.

use crate::types::DomainResult;

pub fn reachable_count(results: &[DomainResult]) -> usize {
    results.iter().filter(|r| r.verdict.is_reachable()).count()
}

/// Unreachable plus faulted: everything that did not reach a 2xx on either
/// scheme.
pub fn unreachable_count(results: &[DomainResult]) -> usize {
    results.iter().filter(|r| !r.verdict.is_reachable()).count()
}

/// Domains serving their canonical content directly: reachable, and the
/// chosen outcome involved no redirect hop. Input order is preserved.
pub fn clean_subset(results: &[DomainResult]) -> Vec<&DomainResult> {
    results.iter().filter(|r| r.is_clean()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Disposition, ProbeOutcome, Scheme, Verdict};
    use chrono::Utc;

    fn result(domain: &str, verdict: Verdict, redirected: bool) -> DomainResult {
        let outcome = |scheme: Scheme, ok: bool| ProbeOutcome {
            scheme,
            elapsed_ms: 12,
            disposition: if ok {
                Disposition::Response {
                    status_code: 200,
                    status_text: "OK".to_string(),
                    redirected,
                    final_url: format!("{}://{}/", scheme, domain),
                }
            } else {
                Disposition::Failed {
                    error: "connection failed".to_string(),
                }
            },
        };
        let reachable = verdict.is_reachable();
        DomainResult {
            domain: domain.to_string(),
            verdict,
            https: Some(outcome(Scheme::Https, reachable)),
            http: Some(outcome(Scheme::Http, false)),
            checked_at: Utc::now(),
        }
    }

    fn sample() -> Vec<DomainResult> {
        vec![
            result(
                "direct.com",
                Verdict::Reachable {
                    scheme: Scheme::Https,
                },
                false,
            ),
            result(
                "hopped.com",
                Verdict::Reachable {
                    scheme: Scheme::Https,
                },
                true,
            ),
            result("dead.com", Verdict::Unreachable, false),
            result(
                "broken input",
                Verdict::Faulted {
                    reason: "invalid probe target".to_string(),
                },
                false,
            ),
        ]
    }

    #[test]
    fn counts_partition_the_results() {
        let results = sample();
        assert_eq!(reachable_count(&results), 2);
        assert_eq!(unreachable_count(&results), 2);
        assert_eq!(
            reachable_count(&results) + unreachable_count(&results),
            results.len()
        );
    }

    #[test]
    fn clean_subset_excludes_redirected_and_unreachable() {
        let results = sample();
        let clean = clean_subset(&results);
        assert_eq!(clean.len(), 1);
        assert_eq!(clean[0].domain, "direct.com");
    }

    #[test]
    fn clean_subset_is_complete() {
        // Every reachable, non-redirected result must appear.
        let results = sample();
        let clean = clean_subset(&results);
        for r in results.iter().filter(|r| r.verdict.is_reachable()) {
            let not_redirected = !r.best().unwrap().is_redirected();
            assert_eq!(clean.iter().any(|c| c.domain == r.domain), not_redirected);
        }
    }

    #[test]
    fn aggregation_is_idempotent() {
        let results = sample();
        assert_eq!(reachable_count(&results), reachable_count(&results));
        assert_eq!(unreachable_count(&results), unreachable_count(&results));
        let first: Vec<String> = clean_subset(&results)
            .iter()
            .map(|r| r.domain.clone())
            .collect();
        let second: Vec<String> = clean_subset(&results)
            .iter()
            .map(|r| r.domain.clone())
            .collect();
        assert_eq!(first, second);
    }
}
