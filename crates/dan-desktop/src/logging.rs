//! Browser console sink for `tracing`
//!
//! The fmt layer formats each event into one buffer; the writer forwards it
//! to `console.log` when the buffer is dropped.

use std::io::{self, Write};
use std::str::FromStr;

use tracing::Level;
use wasm_bindgen::JsValue;

/// Collects one formatted event and prints it on drop
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
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
            web_sys::console::log_1(&JsValue::from_str(line));
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ConsoleMakeWriter;

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { buf: Vec::new() }
    }
}

/// Route `tracing` output to the browser console. `level` is a name such as
/// `"debug"`; anything unparseable means `info`. Safe to call multiple
/// times; later calls are no-ops.
pub fn init(level: &str) {
    let level = Level::from_str(level).unwrap_or(Level::INFO);
    // No wall clock on wasm32-unknown-unknown
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init();
}
