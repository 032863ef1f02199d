//! Captures `tracing` output in unit tests.

use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Runs `f` with a subscriber that records events at `level` and above
    pub fn capture<T>(level: tracing::Level, f: impl FnOnce() -> T) -> (T, CapturedLogs) {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(level)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        (result, logs)
    }

    /// Installs a recording subscriber for the current thread until the guard drops.
    ///
    /// Works for `#[tokio::test]`, which runs on a single thread.
    pub fn install(level: tracing::Level) -> (tracing::subscriber::DefaultGuard, CapturedLogs) {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(level)
            .finish();
        (tracing::subscriber::set_default(subscriber), logs)
    }

    pub fn contents(&self) -> String {
        let buffer = self.0.lock().unwrap();
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
