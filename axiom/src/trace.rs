pub mod subscriber;

pub const DEFAULT_JSON_LOG_FILE: &str = "log.json";

// problem log record fields:
pub const EVENT_FIELD: &str = "event";
pub const PROBLEM_FIELD: &str = "problem";
pub const FORMULAE_FIELD: &str = "formulae";
pub const QUERY_FIELD: &str = "query";

// validation log record fields:
pub const VALID_FIELD: &str = "valid";
pub const ERROR_FIELD: &str = "error";

// log event types:
/// A problem is assembled.
pub const PROBLEM: &str = "@problem";

/// A theory is validated against a query.
pub const VALIDATE: &str = "@validate";
