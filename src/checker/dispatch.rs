// src/checker/dispatch.rs
// =============================================================================
// This module runs the prober over a whole list of URLs.
//
// How it works:
// 1. Turn the URL list into a stream of probe futures (input order)
// 2. Run at most `concurrency` of them at the same time
// 3. Take results as they finish (completion order, NOT input order)
// 4. Keep only the URLs that answered 200
//
// Rust concepts:
// - Streams: an async iterator of values
// - buffer_unordered: bounded concurrency over a stream of futures
// - NonZeroUsize: a usize the type system promises is never 0
// =============================================================================

use std::num::NonZeroUsize;

use futures::stream::{self, StreamExt};

use super::probe::{Probe, ProbeOutcome};
use crate::config::ConfigError;

/// Runs probes with bounded concurrency and collects the URLs that passed.
pub struct Dispatcher<P> {
    prober: P,
    concurrency: NonZeroUsize,
}

impl<P: Probe> Dispatcher<P> {
    // A concurrency of 0 would mean no probe ever runs, so we refuse to build
    // the dispatcher at all. This happens before any URL is touched.
    pub fn new(prober: P, concurrency: usize) -> Result<Self, ConfigError> {
        let concurrency = NonZeroUsize::new(concurrency)
            .ok_or(ConfigError::InvalidConcurrency(concurrency as i64))?;
        Ok(Self {
            prober,
            concurrency,
        })
    }

    pub fn concurrency(&self) -> NonZeroUsize {
        self.concurrency
    }

    /// Probes every URL exactly once and returns the ones that answered 200,
    /// in the order their probes completed.
    ///
    /// Individual failures never make this fail: they are logged by the
    /// prober and simply left out of the result.
    pub async fn run(&self, urls: Vec<String>) -> Vec<String> {
        let total = urls.len();

        // stream::iter hands URLs out in input order; buffer_unordered keeps
        // up to `concurrency` probes in flight and pulls the next URL as soon
        // as a slot frees up.
        let mut completed = stream::iter(urls)
            .map(|url| self.prober.probe(url))
            .buffer_unordered(self.concurrency.get());

        // This loop is the only place that touches `passed`, so results from
        // concurrent probes can't race each other.
        let mut passed = Vec::new();
        while let Some(result) = completed.next().await {
            if result.is_ok() {
                tracing::info!(url = %result.url, "url is up and returned status 200");
                passed.push(result.url);
            } else if let ProbeOutcome::StatusCode { code } = result.outcome {
                tracing::debug!(url = %result.url, status = code, "dropping non-200 url");
            }
        }

        tracing::info!(checked = total, passed = passed.len(), "finished checking urls");
        passed
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. buffer_unordered vs buffered?
//    - buffered(N) also runs N at once but gives results back in input order
//    - buffer_unordered(N) gives each result the moment it's ready
//    - We don't care about order, and we don't want a slow URL at the front
//      to hold back the results behind it
//
// 2. Why is there no Mutex around `passed`?
//    - All the probe futures live inside one stream, polled by one loop
//    - Only that loop pushes to the Vec, so there's nothing to lock
//
// 3. Why does `map` borrow `self.prober`?
//    - The stream lives inside run(), so it can't outlive `self`
//    - No Arc or clone needed for the prober
// -----------------------------------------------------------------------------
