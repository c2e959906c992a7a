use crate::http::create_http_pool;
use crate::list;
use crate::resolve;
use crate::types::{BatchEvent, BatchState, DomainResult, ProbeConfig, ProbeOutcome, Progress, Scheme};
use futures::stream::{self, Stream, StreamExt};
use reqwest::Client;
use tracing::debug;

pub struct Prober {
    client: Client,
    config: ProbeConfig,
}

impl Prober {
    pub fn new() -> Self {
        Self::with_config(ProbeConfig::default())
    }

    pub fn with_config(config: ProbeConfig) -> Self {
        let client = create_http_pool(config.timeout);
        Self { client, config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// One protocol attempt against one domain. Never fails: an unparseable
    /// target is reported as a failed outcome.
    pub async fn probe_scheme(&self, domain: &str, scheme: Scheme) -> ProbeOutcome {
        match crate::probe::target_url(scheme, domain.trim()) {
            Ok(url) => crate::probe::probe(&self.client, scheme, url, self.config.timeout).await,
            Err(e) => ProbeOutcome {
                scheme,
                elapsed_ms: 0,
                disposition: crate::types::Disposition::Failed {
                    error: e.to_string(),
                },
            },
        }
    }

    /// Probes one domain over both schemes. `None` for a blank domain.
    pub async fn check_one(&self, domain: &str) -> Option<DomainResult> {
        resolve::resolve(&self.client, domain, &self.config).await
    }

    /// Group-parallel, globally sequential scheduler. The list is split into
    /// contiguous groups of at most `batch_size`; every resolution within a
    /// group runs concurrently and the stream yields `GroupStarted` then
    /// `GroupCompleted` per group, pausing `inter_batch_pause` between
    /// groups. One domain's failure never aborts the batch.
    pub fn batch_stream(&self, domains: Vec<String>) -> impl Stream<Item = BatchEvent> + '_ {
        self.stream_groups(list::sanitize(domains))
    }

    /// Drives `batch_stream` to completion, folding every event into a
    /// scheduler-owned `BatchState`.
    pub async fn run_batch(&self, domains: Vec<String>) -> BatchState {
        let domains = list::sanitize(domains);
        let mut state = BatchState::start(domains.len());
        let mut events = Box::pin(self.stream_groups(domains));
        while let Some(event) = events.next().await {
            state.absorb(event);
        }
        state.finish();
        state
    }

    /// Expects a pre-sanitized list: trimmed, no blanks.
    fn stream_groups(&self, domains: Vec<String>) -> impl Stream<Item = BatchEvent> + '_ {
        let total = domains.len();
        let batch_size = self.config.batch_size.max(1);

        let mut groups = Vec::new();
        let mut completed = 0usize;
        for chunk in domains.chunks(batch_size) {
            completed += chunk.len();
            groups.push((
                chunk.to_vec(),
                Progress {
                    completed: completed.min(total),
                    total,
                },
            ));
        }

        stream::iter(groups.into_iter().enumerate()).flat_map(move |(index, (group, progress))| {
            let pause = self.config.inter_batch_pause;
            let started_domains = group.clone();
            let started = async move {
                if index > 0 {
                    tokio::time::sleep(pause).await;
                }
                BatchEvent::GroupStarted {
                    domains: started_domains,
                }
            };

            let completed = async move {
                let width = group.len().max(1);
                let results: Vec<DomainResult> = stream::iter(group)
                    .map(move |domain| async move {
                        resolve::resolve(&self.client, &domain, &self.config).await
                    })
                    .buffer_unordered(width)
                    .filter_map(|result| async move { result })
                    .collect()
                    .await;
                debug!(
                    group = index,
                    completed = progress.completed,
                    total = progress.total,
                    "group completed"
                );
                BatchEvent::GroupCompleted { results, progress }
            };

            stream::once(started).chain(stream::once(completed))
        })
    }
}

impl Default for Prober {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Prober {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            config: self.config.clone(),
        }
    }
}
