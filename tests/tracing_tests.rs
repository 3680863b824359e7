//! Trace events emitted on the branch decisions a caller cannot observe from
//! the return value alone.

#![cfg(feature = "tracing")]

use chainlift::control::{Absent, Continuation, Maybe, Monadic, check, continue_left};
use rstest::rstest;
use std::io;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        let buffer = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(action: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, action);
    logs.contents()
}

#[rstest]
fn absent_maybe_emits_hook_event() {
    let logs = capture(|| {
        let continuation = Continuation::new(|i: i32| i + 1, |_: Absent| ());
        assert_eq!(Maybe::<i32>::empty().then(&continuation), Maybe::empty());
    });

    assert!(logs.contains("TRACE"));
    assert!(logs.contains("continuation applied to absent Maybe"));
}

#[rstest]
fn rejected_check_emits_event() {
    let logs = capture(|| {
        assert_eq!(check(|i: &i32| *i > 10).run(3), Maybe::empty());
    });

    assert!(logs.contains("check rejected its input"));
}

#[rstest]
fn present_paths_stay_silent() {
    let logs = capture(|| {
        assert_eq!(Maybe::of(1).then(continue_left(|i: i32| i * 2)), Maybe::of(2));
        assert_eq!(check(|i: &i32| *i > 10).run(12), Maybe::of(12));
    });

    assert!(logs.is_empty(), "unexpected events: {logs}");
}
