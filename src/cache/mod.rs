// src/cache/mod.rs
// =============================================================================
// In-memory caching with a time-to-live.
//
// Submodules:
// - clock: where "now" comes from (real or manual)
// - ttl: the cache itself
// =============================================================================

mod clock;
mod ttl;

pub use clock::{Clock, SystemClock};
pub use ttl::TtlCache;

#[cfg(test)]
pub use clock::ManualClock;
