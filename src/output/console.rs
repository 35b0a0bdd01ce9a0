use super::AdvicePresenter;
use crate::error::Result;
use crate::models::Advice;
use std::io::Write;

const RULE_WIDTH: usize = 50;

/// Plain-text presenter: a banner plus the advice on `out`, errors on `err`.
pub struct ConsoleOutput<W: Write, E: Write> {
    title: String,
    out: W,
    err: E,
}

impl<W: Write, E: Write> ConsoleOutput<W, E> {
    pub fn new(title: impl Into<String>, out: W, err: E) -> Self {
        Self {
            title: title.into(),
            out,
            err,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl<W: Write, E: Write> AdvicePresenter for ConsoleOutput<W, E> {
    fn render(&mut self, advice: &Advice) -> Result<()> {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(self.out, "{}", heavy)?;
        writeln!(self.out, "{}", self.title)?;
        writeln!(self.out, "{}", heavy)?;
        writeln!(self.out, "Season: {}", advice.season)?;
        writeln!(self.out, "Plant:  {}", advice.plant_type)?;
        writeln!(self.out, "{}", light)?;
        writeln!(self.out, "{}", advice.text)?;
        writeln!(self.out, "{}", heavy)?;
        self.out.flush()?;
        Ok(())
    }

    fn render_error(&mut self, message: &str) -> Result<()> {
        writeln!(self.err, "❌ Error: {}", message)?;
        self.err.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output() -> ConsoleOutput<Vec<u8>, Vec<u8>> {
        ConsoleOutput::new("🌱 Garden Advice", Vec::new(), Vec::new())
    }

    #[test]
    fn render_writes_banner_and_advice_to_stdout() {
        let mut console = output();
        console
            .render(&Advice::new("summer", "flower", "☀️ SUMMER\n\n🌺 FLOWER"))
            .unwrap();

        let (out, err) = console.into_inner();
        let out = String::from_utf8(out).unwrap();
        assert!(err.is_empty());
        assert!(out.contains("🌱 Garden Advice\n"));
        assert!(out.contains("Season: summer\n"));
        assert!(out.contains("Plant:  flower\n"));
        assert!(out.contains("☀️ SUMMER\n\n🌺 FLOWER\n"));
        assert!(out.starts_with(&"=".repeat(RULE_WIDTH)));
    }

    #[test]
    fn render_error_goes_to_stderr_only() {
        let mut console = output();
        console.render_error("Please pick a plant from the list").unwrap();

        let (out, err) = console.into_inner();
        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "❌ Error: Please pick a plant from the list\n"
        );
    }
}
