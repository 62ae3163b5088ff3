/// Upper bound constant shared by the whole process.
pub const MAX_VALUE: i64 = 100;

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";
