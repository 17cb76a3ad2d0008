//! Browser console logging
//!
//! `tracing` events are formatted by the core subscriber and flushed to
//! `console.log` one event at a time.

use std::io;

use silvess::config::LoggingConfig;
use silvess::logging::LoggingError;
use tracing_subscriber::fmt::MakeWriter;

/// Writer factory handed to the subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { buf: Vec::new() }
    }
}

/// Buffers one formatted event, logs it on drop
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if !line.is_empty() {
            web_sys::console::log_1(&line.into());
        }
    }
}

pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    // No system clock on wasm32-unknown-unknown
    let mut config = config.clone();
    config.timestamps = false;
    config.ansi = false;
    silvess::logging::init_with_writer(&config, ConsoleMakeWriter)
}
