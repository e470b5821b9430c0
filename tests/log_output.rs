//! What actually lands in the log file.
//!
//! The subscriber is global, so everything runs in one test.

use std::fs;

use secret_watcher::lifecycle::Shutdown;
use secret_watcher::observability::init_logging;
use secret_watcher::{SecretWatcher, WatcherConfig};

/// `YYYY-MM-DD HH:MM:SS` at the start of the line.
fn has_timestamp(line: &str) -> bool {
    let bytes = line.as_bytes();
    bytes.len() >= 19
        && bytes[..19].iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            10 => *b == b' ',
            13 | 16 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}

/// Index of the first line containing `needle`, checking it is stamped.
fn position(lines: &[&str], needle: &str) -> usize {
    let idx = lines
        .iter()
        .position(|l| l.contains(needle))
        .unwrap_or_else(|| panic!("no log line contains {:?}\n{}", needle, lines.join("\n")));
    assert!(has_timestamp(lines[idx]), "unstamped line: {}", lines[idx]);
    idx
}

#[tokio::test(start_paused = true)]
async fn test_log_file_records_every_step() {
    std::env::remove_var("RUST_LOG");

    let dir = tempfile::tempdir().unwrap();
    let secret_path = dir.path().join("secret.json");
    let log_path = dir.path().join("logs").join("watcher.log");
    fs::create_dir_all(log_path.parent().unwrap()).unwrap();
    fs::write(&log_path, "prior\n").unwrap();

    let config = WatcherConfig {
        secret_path: secret_path.clone(),
        log_path: log_path.clone(),
        ..WatcherConfig::default()
    };
    init_logging(&config).unwrap();
    let mut watcher = SecretWatcher::new(config);

    watcher.tick();

    fs::write(&secret_path, "{\"api_key\": ").unwrap();
    watcher.tick();

    fs::write(&secret_path, r#"{"api_key": "abcd1234efgh"}"#).unwrap();
    watcher.tick();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let handle = tokio::spawn(async move {
        watcher.run(rx).await;
    });
    tokio::task::yield_now().await;
    shutdown.trigger();
    handle.await.unwrap();

    let log = fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines[0], "prior");

    let not_found = position(&lines, &format!("Config file not found: {}", secret_path.display()));
    let parse_error = position(&lines, "Error parsing JSON config");
    let read = position(&lines, "Config file read: 27 characters");
    let parsed = position(&lines, r#"Parsed JSON config with keys: ["api_key"]"#);
    let applied = position(&lines, r#"New config applied: {"api_key": "abcd...efgh"}"#);
    let used = position(&lines, "Using API key for authentication");
    let started = position(&lines, "Secret watcher started - monitoring for secret updates");
    let monitoring = position(&lines, &format!("Monitoring file: {}", secret_path.display()));
    let stopped = position(&lines, "Application shutting down gracefully");

    assert!(0 < not_found);
    assert!(not_found < parse_error);
    assert!(parse_error < read);
    assert!(read < parsed && parsed < applied && applied < used);
    assert!(used < started && started < monitoring && monitoring < stopped);

    // The acknowledgment line carries no trailing fields.
    assert!(lines[used].ends_with("Using API key for authentication"));
}
