use linkage::Tabular;
use std::{fmt::Display, io::Write};

// A simple TOML-like writer for the CLI reports
pub(crate) struct Logger<'a, W: Write> {
    writer: &'a mut W,
}

impl<'a, W: Write> Logger<'a, W> {
    pub(crate) fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }

    pub(crate) fn top_title(&mut self, title: &str) -> std::io::Result<()> {
        writeln!(self.writer, "[{title}]")
    }

    pub(crate) fn title(&mut self, title: &str) -> std::io::Result<()> {
        writeln!(self.writer, "\n[{title}]")
    }

    pub(crate) fn log<V: Display>(&mut self, key: &str, value: V) -> std::io::Result<()> {
        writeln!(self.writer, "{key}={value}")
    }

    pub(crate) fn log_f64(&mut self, key: &str, value: f64) -> std::io::Result<()> {
        writeln!(self.writer, "{key}={value:.04}")
    }

    pub(crate) fn log_fields<T: Tabular>(&mut self, t: &T) -> std::io::Result<()> {
        t.fields().into_iter().try_for_each(|(k, v)| self.log_f64(&k, v))
    }

    pub(crate) fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}
