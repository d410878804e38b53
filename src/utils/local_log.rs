// ========================================
// LOCAL (NON-PRODUCTION) CONSOLE LOGGER
// ========================================

use std::fmt::{Display, Write as _};
use std::io::{self, Write};

use parking_lot::Mutex;

use crate::config::AppEnvironment;

/// Developer console output, silenced when the environment is `production`.
///
/// The environment is captured once at construction. Output bypasses
/// `tracing` and goes straight to the sink as plain lines.
pub struct LocalLogger<W: Write = io::Stderr> {
    enabled: bool,
    sink: Mutex<W>,
}

impl LocalLogger<io::Stderr> {
    pub fn new(env: &AppEnvironment) -> Self {
        Self::with_writer(env, io::stderr())
    }
}

impl<W: Write> LocalLogger<W> {
    pub fn with_writer(env: &AppEnvironment, writer: W) -> Self {
        Self {
            enabled: !env.is_production(),
            sink: Mutex::new(writer),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Writes all values on one line, space separated. No-op in production.
    /// Sink errors are returned untouched.
    pub fn log(&self, values: &[&dyn Display]) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let line = render_line(values);
        let mut sink = self.sink.lock();
        sink.write_all(line.as_bytes())?;
        sink.flush()
    }

    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }
}

fn render_line(values: &[&dyn Display]) -> String {
    let mut line = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(line, "{}", value);
    }
    line.push('\n');
    line
}

/// `local_log!(logger, "user", id, ok)` → `logger.log(&[&"user", &id, &ok])`.
#[macro_export]
macro_rules! local_log {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.log(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}
