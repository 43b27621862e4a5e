//! Domain-level constants.
//!
//! Identity assignment and session defaults.

// =============================================================================
// Identity
// =============================================================================

/// First identifier handed out by every entity collection
pub const FIRST_ENTITY_ID: i32 = 1;

// =============================================================================
// Sessions
// =============================================================================

/// Seconds per hour
pub const SECONDS_PER_HOUR: u64 = 3600;

/// Default interval between expired-session sweeps (24 hours)
pub const DEFAULT_SESSION_SWEEP_INTERVAL_SECS: u64 = 24 * SECONDS_PER_HOUR;

/// Default lifetime of a session entry when the caller gives none (24 hours)
pub const DEFAULT_SESSION_TTL_SECS: u64 = 24 * SECONDS_PER_HOUR;
