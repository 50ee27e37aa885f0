use crate::logging::{LogLevel, LogTarget, Logger};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_log_dir() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let uniq = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("argbind-log-test-{nanos}-{uniq}"))
}

#[test]
fn logger_defers_file_creation_until_needed() {
    let logger = Logger::quiet();
    logger.set_log_dir(temp_log_dir());
    assert!(logger.log_path().is_none());

    // Console-only should not create a log file.
    logger.info("console only", LogTarget::ConsoleOnly);
    assert!(logger.log_path().is_none());

    logger.info("file line", LogTarget::FileOnly);
    let path = logger.log_path().expect("log path should be set");
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("file line"));
    assert!(contents.contains("INFO"));
}

#[test]
fn logger_writes_levels_and_combined_targets() {
    let logger = Logger::quiet();
    logger.set_log_dir(temp_log_dir());

    logger.warn("warn line", LogTarget::FileOnly);
    logger.error("error line", LogTarget::ConsoleAndFile);

    let path = logger.log_path().expect("log path should be set");
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("WARN  warn line"));
    assert!(contents.contains("ERROR error line"));
}

#[test]
fn logger_skips_file_logging_when_disabled() {
    let logger = Logger::quiet();
    logger.set_log_dir(temp_log_dir());
    logger.set_file_logging_enabled(false);

    logger.info("file should not exist", LogTarget::ConsoleAndFile);
    assert!(logger.log_path().is_none());

    logger.set_file_logging_enabled(true);
    logger.info("now write", LogTarget::FileOnly);
    assert!(logger.log_path().is_some());
}

#[test]
fn set_log_dir_is_ignored_after_file_opens() {
    let first = temp_log_dir();
    let logger = Logger::quiet();
    logger.set_log_dir(&first);
    logger.info("open", LogTarget::FileOnly);

    logger.set_log_dir(temp_log_dir());
    assert_eq!(logger.log_dir(), Some(first.clone()));
    assert!(logger.log_path().unwrap().starts_with(&first));
}

#[test]
fn history_records_every_target_and_is_bounded() {
    let logger = Logger::quiet();
    logger.set_file_logging_enabled(false);

    logger.info("one", LogTarget::ConsoleOnly);
    logger.warn("two", LogTarget::FileOnly);
    assert_eq!(logger.recent(), vec!["INFO  one", "WARN  two"]);

    for i in 0..100 {
        logger.info(format!("line {i}"), LogTarget::ConsoleOnly);
    }
    let recent = logger.recent();
    assert_eq!(recent.len(), 64);
    assert_eq!(recent.last().unwrap(), "INFO  line 99");
}

#[test]
fn clones_share_history() {
    let logger = Logger::quiet();
    logger.set_file_logging_enabled(false);
    let clone = logger.clone();
    clone.error("from clone", LogTarget::ConsoleOnly);
    assert_eq!(logger.recent(), vec!["ERROR from clone"]);
}

#[test]
fn level_display_honours_padding() {
    assert_eq!(format!("{:<5}|", LogLevel::Info), "INFO |");
    assert_eq!(LogLevel::Error.to_string(), "ERROR");
}
