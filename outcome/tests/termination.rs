//! The default handler ends the whole process, so each case re-runs this
//! test binary as a child, lets it misuse a result, and inspects how it
//! ended. Which cases exist depends on the `no-exit` / `no-prints` switches
//! the crate was built with.

use std::env;
use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use ea_outcome::config::{self, CONFIG};
use ea_outcome::{Err, Ok, Result};

const CHILD: &str = "EA_OUTCOME_TERMINATION_CHILD";

// A halted child never finishes on its own; this long without exiting
// counts as halted.
const HALT_GRACE: Duration = Duration::from_secs(2);

#[allow(dead_code)]
const UNWRAP_DIAGNOSTIC: &str = "called `Result::unwrap()` on an `Err` value";

#[derive(Debug, PartialEq, Eq)]
enum Ending {
    Exited(Option<i32>),
    Halted,
}

fn in_child(test: &str) -> bool {
    env::var(CHILD).map(|v| v == test).unwrap_or(false)
}

fn run_child(test: &str) -> (Ending, String) {
    let mut child = Command::new(env::current_exe().expect("test binary path"))
        .args([test, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD, test)
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn child test process");

    let deadline = Instant::now() + HALT_GRACE;
    let ending = loop {
        if let Some(status) = child.try_wait().expect("poll child") {
            break Ending::Exited(status.code());
        }
        if Instant::now() >= deadline {
            child.kill().expect("kill halted child");
            break Ending::Halted;
        }
        thread::sleep(Duration::from_millis(20));
    };

    let mut stderr = String::new();
    child
        .stderr
        .take()
        .expect("piped stderr")
        .read_to_string(&mut stderr)
        .expect("read child stderr");
    child.wait().expect("reap child");
    (ending, stderr)
}

#[allow(dead_code)]
fn unwrap_on_err() {
    let r: Result<i32, i32> = Err::new(0).into();
    let _ = r.unwrap();
    unreachable!("misuse handler returned");
}

#[allow(dead_code)]
fn unwrap_err_on_ok() {
    let r: Result<(), i32> = Ok::unit().into();
    let _ = r.unwrap_err();
    unreachable!("misuse handler returned");
}

#[cfg(all(feature = "std", not(feature = "no-exit"), not(feature = "no-prints")))]
#[test]
fn unwrap_on_err_exits_with_failure() {
    const NAME: &str = "unwrap_on_err_exits_with_failure";
    if in_child(NAME) {
        unwrap_on_err();
    }

    let (ending, stderr) = run_child(NAME);
    assert_eq!(ending, Ending::Exited(Some(config::EXIT_FAILURE)));
    assert!(stderr.contains(UNWRAP_DIAGNOSTIC));
    assert!(CONFIG.print_diagnostics);
    assert!(CONFIG.exit_process);
}

#[cfg(all(feature = "std", not(feature = "no-exit"), not(feature = "no-prints")))]
#[test]
fn unwrap_err_on_ok_exits_with_failure() {
    const NAME: &str = "unwrap_err_on_ok_exits_with_failure";
    if in_child(NAME) {
        unwrap_err_on_ok();
    }

    let (ending, stderr) = run_child(NAME);
    assert_eq!(ending, Ending::Exited(Some(config::EXIT_FAILURE)));
    assert!(stderr.contains("called `Result::unwrap_err()` on an `Ok` value"));
}

#[cfg(all(feature = "std", not(feature = "no-exit"), feature = "no-prints"))]
#[test]
fn no_prints_exits_silently() {
    const NAME: &str = "no_prints_exits_silently";
    if in_child(NAME) {
        unwrap_on_err();
    }

    let (ending, stderr) = run_child(NAME);
    assert_eq!(ending, Ending::Exited(Some(config::EXIT_FAILURE)));
    assert!(stderr.trim().is_empty(), "unexpected stderr: {stderr:?}");
    assert!(!CONFIG.print_diagnostics);
    assert!(CONFIG.exit_process);
}

#[cfg(all(feature = "std", feature = "no-exit", not(feature = "no-prints")))]
#[test]
fn no_exit_halts_after_diagnostic() {
    const NAME: &str = "no_exit_halts_after_diagnostic";
    if in_child(NAME) {
        unwrap_on_err();
    }

    let (ending, stderr) = run_child(NAME);
    assert_eq!(ending, Ending::Halted);
    assert!(stderr.contains(UNWRAP_DIAGNOSTIC));
    assert!(CONFIG.print_diagnostics);
    assert!(!CONFIG.exit_process);
}

// `constrained`, or no `std` at all: no exit facility and nothing written to
// stderr (without `std` the diagnostic only reaches an installed logger).
#[cfg(any(all(feature = "no-exit", feature = "no-prints"), not(feature = "std")))]
#[test]
fn halts_silently_without_exit_or_console() {
    const NAME: &str = "halts_silently_without_exit_or_console";
    if in_child(NAME) {
        unwrap_on_err();
    }

    let (ending, stderr) = run_child(NAME);
    assert_eq!(ending, Ending::Halted);
    assert!(stderr.trim().is_empty(), "unexpected stderr: {stderr:?}");
    assert!(!CONFIG.exit_process);
    assert_eq!(CONFIG.print_diagnostics, cfg!(not(feature = "no-prints")));
}
