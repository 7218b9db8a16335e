/// Initialize structured logging for unit tests.
///
/// Delegates to the shared test-support crate so unit tests and
/// integration tests configure the exact same subscriber.
pub fn init() {
    backend_test_support::logging::init();
}
