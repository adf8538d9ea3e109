//! Shared helpers for database-backed integration tests.

/// Environment variable naming the PostgreSQL instance used by the suite.
pub const TEST_DATABASE_URL: &str = "ROSTER_TEST_DATABASE_URL";

/// Database URL for the suite, or `None` to skip database tests.
///
/// Skipping is reported on stderr so CI logs show which suites did not run.
pub fn test_database_url() -> Option<String> {
    match std::env::var(TEST_DATABASE_URL) {
        Ok(url) if !url.trim().is_empty() => Some(url),
        _ => {
            eprintln!("SKIP-TEST-DATABASE: {TEST_DATABASE_URL} is not set");
            None
        }
    }
}
