//! Centralized default constants for smart-notes.
//!
//! All crates reference these constants instead of defining their own
//! magic numbers.

// =============================================================================
// SEARCH
// =============================================================================

/// Minimum fuzzy score (0-100) a query word must reach for a note to match.
pub const FILTER_THRESHOLD: u8 = 80;

/// Number of notes returned by the recent-notes listing.
pub const RECENT_LIMIT: u32 = 25;

// =============================================================================
// SUMMARIZATION
// =============================================================================

/// Summary length the model is instructed to stay under (not enforced locally).
pub const SUMMARY_MAX_CHARS: usize = 100;

/// Default Gemini generation model.
pub const GEN_MODEL: &str = "gemini-2.0-flash-001";

/// Default Gemini API endpoint.
pub const GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Timeout for generation requests (seconds).
pub const GEN_TIMEOUT_SECS: u64 = 60;

// =============================================================================
// SERVER
// =============================================================================

/// Default bind host.
pub const SERVER_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const SERVER_PORT: u16 = 8000;

/// Default database pool size.
pub const DB_MAX_CONNECTIONS: u32 = 10;
