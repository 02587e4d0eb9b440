//! Application-wide constants
//!
//! Defaults used when the corresponding environment variable is not set.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default tracing filter
pub const DEFAULT_RUST_LOG: &str = "putka=debug,tower_http=debug";

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// EVALUATION MANAGER DEFAULTS
// =============================================================================

/// Default evaluation manager host
pub const DEFAULT_MANAGER_HOST: &str = "localhost";

/// Default evaluation manager port
pub const DEFAULT_MANAGER_PORT: u16 = 31415;

/// Default manager protocol version
pub const DEFAULT_MANAGER_PROTO: &str = "03";

/// Length of the manager protocol version string
pub const MANAGER_PROTO_LEN: usize = 2;

// =============================================================================
// LISTING LIMITS
// =============================================================================

/// Default number of upload ids returned by a listing
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Maximum number of upload ids returned by a listing
pub const MAX_LIST_LIMIT: i64 = 1000;

/// Maximum number of test cases accepted in one request body
pub const MAX_TEST_CASES_PER_REQUEST: u64 = 10_000;

/// Maximum testscript size accepted in one request body, in bytes
pub const MAX_TESTSCRIPT_LEN: u64 = 1_048_576;
