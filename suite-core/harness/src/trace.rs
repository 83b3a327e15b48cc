//! Tracing capture for test diagnostics.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

/// A writer that appends to a shared buffer.
#[derive(Clone)]
struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CaptureWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// The capture level for driver execution, taken from `TRACE_LEVEL`.
pub fn level_from_env() -> Level {
    match std::env::var("TRACE_LEVEL").as_deref() {
        Ok("trace") => Level::TRACE,
        Ok("debug") => Level::DEBUG,
        Ok("info") => Level::INFO,
        _ => Level::WARN,
    }
}

/// Buffers tracing output emitted while `f` runs.
pub fn with_capture<F, T>(level: Level, f: F) -> (T, String)
where
    F: FnOnce() -> T,
{
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let writer = CaptureWriter(Arc::clone(&buffer));

    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_ansi(false)
        .with_target(true)
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(writer)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.lock().unwrap().clone();
    (result, String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use tracing::Level;

    use super::with_capture;

    #[test]
    fn captures_events_at_or_above_the_level() {
        let ((), captured) = with_capture(Level::DEBUG, || {
            tracing::debug!("visible");
            tracing::trace!("filtered");
        });

        assert!(captured.contains("visible"));
        assert!(!captured.contains("filtered"));
    }

    #[test]
    fn returns_the_closure_result() {
        let (value, _) = with_capture(Level::WARN, || 42);
        assert_eq!(value, 42);
    }
}
