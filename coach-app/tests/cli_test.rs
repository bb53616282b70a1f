//! 二进制程序的端到端测试

use std::process::Command;

#[test]
fn test_binary_prints_exactly_two_lines() {
    let output = Command::new(env!("CARGO_BIN_EXE_coach-app"))
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run coach-app");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Play Tennis\nToday is your lucky day!\n"
    );
}

#[test]
fn test_logs_stay_off_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_coach-app"))
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to run coach-app");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 2);
    assert!(!output.stderr.is_empty());
}
