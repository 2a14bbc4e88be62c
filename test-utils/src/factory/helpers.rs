//! Shared helper utilities for factory methods.

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds an email address that is unique within the test process.
///
/// # Arguments
/// - `prefix` - Local-part prefix, e.g. `"user"` or `"rider"`
///
/// # Returns
/// - `String` - Address of the form `{prefix}{n}@example.com`
pub fn unique_email(prefix: &str) -> String {
    format!("{}{}@example.com", prefix, next_id())
}
