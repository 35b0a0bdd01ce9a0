use super::AdvicePresenter;
use crate::error::Result;
use crate::models::Advice;
use askama::Template;
use std::io::Write;

#[derive(Template)]
#[template(path = "advice_card.html")]
struct AdviceCard<'a> {
    title: &'a str,
    advice: &'a Advice,
}

#[derive(Template)]
#[template(path = "error_card.html")]
struct ErrorCard<'a> {
    message: &'a str,
}

/// Writes the advice card / error card fragment for embedding in a page.
pub struct HtmlOutput<W: Write> {
    title: String,
    out: W,
}

impl<W: Write> HtmlOutput<W> {
    pub fn new(title: impl Into<String>, out: W) -> Self {
        Self {
            title: title.into(),
            out,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_fragment(&mut self, html: &str) -> Result<()> {
        writeln!(self.out, "{}", html)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> AdvicePresenter for HtmlOutput<W> {
    fn render(&mut self, advice: &Advice) -> Result<()> {
        let card = AdviceCard {
            title: &self.title,
            advice,
        };
        let html = card.render()?;
        self.write_fragment(&html)
    }

    fn render_error(&mut self, message: &str) -> Result<()> {
        let html = ErrorCard { message }.render()?;
        self.write_fragment(&html)
    }
}
