use super::ResolveDomainUseCase;
use crate::ports::ResolutionReporter;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

const DEFAULT_MAX_CONCURRENCY: usize = 64;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub submitted: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub panicked: usize,
}

/// Resolves a list of domains concurrently, one task per entry.
///
/// A semaphore caps how many resolutions run at once (`0` lifts the cap).
/// `execute` returns once every task has finished, or as soon as the
/// cancellation token fires, in which case outstanding tasks are aborted.
pub struct BatchResolveUseCase {
    resolver: Arc<ResolveDomainUseCase>,
    max_concurrency: usize,
    shutdown: CancellationToken,
}

impl BatchResolveUseCase {
    pub fn new(resolver: Arc<ResolveDomainUseCase>) -> Self {
        Self {
            resolver,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn execute(
        &self,
        domains: Vec<String>,
        reporter: Arc<dyn ResolutionReporter>,
    ) -> BatchSummary {
        let permits = self.max_concurrency.min(Semaphore::MAX_PERMITS);
        let gate = (permits > 0).then(|| Arc::new(Semaphore::new(permits)));

        let mut tasks = JoinSet::new();
        for domain in domains {
            let resolver = Arc::clone(&self.resolver);
            let reporter = Arc::clone(&reporter);
            let gate = gate.clone();

            tasks.spawn(async move {
                let _permit = match gate {
                    Some(gate) => gate.acquire_owned().await.ok(),
                    None => None,
                };

                reporter.started(&domain);
                let records = resolver.execute(&domain).await;
                reporter.report(&domain, &records);
            });
        }

        let mut summary = BatchSummary {
            submitted: tasks.len(),
            ..Default::default()
        };

        info!(
            domains = summary.submitted,
            max_concurrency = self.max_concurrency,
            "Starting batch resolution"
        );

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    warn!(
                        outstanding = tasks.len(),
                        "Batch resolution cancelled, aborting outstanding lookups"
                    );
                    tasks.abort_all();
                    while let Some(joined) = tasks.join_next().await {
                        tally(&mut summary, joined);
                    }
                    break;
                }
                joined = tasks.join_next() => match joined {
                    Some(joined) => tally(&mut summary, joined),
                    None => break,
                },
            }
        }

        info!(
            completed = summary.completed,
            cancelled = summary.cancelled,
            panicked = summary.panicked,
            "Batch resolution finished"
        );

        summary
    }
}

fn tally(summary: &mut BatchSummary, joined: Result<(), tokio::task::JoinError>) {
    match joined {
        Ok(()) => summary.completed += 1,
        Err(e) if e.is_cancelled() => summary.cancelled += 1,
        Err(e) => {
            error!(error = %e, "Resolution task panicked");
            summary.panicked += 1;
        }
    }
}
