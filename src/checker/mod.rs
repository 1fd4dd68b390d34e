// src/checker/mod.rs
// =============================================================================
// This module contains all URL checking logic.
//
// Submodules:
// - probe: Makes one HTTP GET per URL and classifies what came back
// - dispatch: Runs many probes with a concurrency limit and keeps the 200s
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

mod dispatch;
mod probe;

// Re-export public items from submodules
// This lets users write `checker::Dispatcher` instead of
// `checker::dispatch::Dispatcher`
pub use dispatch::Dispatcher;
pub use probe::HttpProber;
