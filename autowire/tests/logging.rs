//! Checks the `tracing` events emitted around a resolution.

use autowire::{Container, Value};
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.0.lock().unwrap().extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

impl Capture {
  fn contents(&self) -> String {
    String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
  }
}

fn captured(f: impl FnOnce()) -> String {
  let capture = Capture::default();
  let writer = capture.clone();
  let subscriber = tracing_subscriber::fmt()
    .with_max_level(tracing::Level::TRACE)
    .with_ansi(false)
    .with_writer(move || writer.clone())
    .finish();
  tracing::subscriber::with_default(subscriber, f);
  capture.contents()
}

#[test]
fn test_resolution_logs_entry_and_exit() {
  let logs = captured(|| {
    let container = Container::new();
    container.bind_instance("greeting", Value::new("hello"));
    container.resolve("greeting", &[]).unwrap();
  });

  assert!(logs.contains("bind instance"));
  assert!(logs.contains("resolving"));
  assert!(logs.contains("resolved"));
  assert!(logs.contains("identifier=greeting"));
}

#[test]
fn test_failed_resolution_is_logged() {
  let logs = captured(|| {
    let container = Container::new();
    assert!(container.resolve("missing", &[]).is_err());
  });

  assert!(logs.contains("resolution failed"));
  assert!(!logs.contains("resolved"));
}
