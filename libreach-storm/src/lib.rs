mod http;
mod probe;
mod prober;
mod resolve;
mod types;

pub mod export;
pub mod list;
pub mod report;

pub use prober::Prober;
pub use types::{
    BatchEvent, BatchState, Disposition, DomainResult, ProbeConfig, ProbeOutcome, Progress,
    Scheme, Verdict,
};

pub async fn check(domain: &str) -> Option<DomainResult> {
    Prober::new().check_one(domain).await
}

pub async fn check_many<I>(domains: I) -> BatchState
where
    I: IntoIterator<Item = String>,
{
    Prober::new().run_batch(domains.into_iter().collect()).await
}
