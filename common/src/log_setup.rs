use std::sync::OnceLock;

use flexi_logger::{Duplicate, FileSpec, Logger, LoggerHandle};

// The handle flushes pending writes on shutdown, so it lives for the whole run.
static LOG_HANDLE: OnceLock<LoggerHandle> = OnceLock::new();

pub fn setup_logging(base_level: &str) {
    let handle = Logger::try_with_str(base_level)
        .unwrap_or_else(|e| panic!("Logger initialization failed with {}", e))
        .log_to_file(FileSpec::default().directory("logs").basename("nodarium"))
        .duplicate_to_stderr(Duplicate::Warn)
        .duplicate_to_stdout(Duplicate::All)
        .rotate(
            flexi_logger::Criterion::Size(1024 * 1024), //1MB
            flexi_logger::Naming::Timestamps,
            flexi_logger::Cleanup::KeepLogFiles(5),
        )
        .start()
        .unwrap_or_else(|e| panic!("Logger initialization failed with {}", e));

    assert!(
        LOG_HANDLE.set(handle).is_ok(),
        "logging already initialized"
    );
}
