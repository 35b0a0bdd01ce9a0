use super::AdvicePresenter;
use crate::error::Result;
use crate::models::Advice;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// One JSON document per call, newline terminated. Errors are written to the
/// same stream so consumers only read one pipe.
pub struct JsonOutput<W: Write> {
    out: W,
    pretty: bool,
}

impl<W: Write> JsonOutput<W> {
    pub fn new(out: W) -> Self {
        Self { out, pretty: false }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.out, value)?;
        } else {
            serde_json::to_writer(&mut self.out, value)?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> AdvicePresenter for JsonOutput<W> {
    fn render(&mut self, advice: &Advice) -> Result<()> {
        self.write_value(advice)
    }

    fn render_error(&mut self, message: &str) -> Result<()> {
        self.write_value(&ErrorBody { error: message })
    }
}
