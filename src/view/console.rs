use anyhow::Result;
use crossterm::{
    style::{Stylize, style},
    tty::IsTty,
};
use std::io::{self, Stdout, Write};

use crate::{
    format,
    view::{ContactLine, EMPTY_BOOK_MESSAGE, HELP_LINES, HELP_TITLE, View},
};

/// Plain line output. Colors are only used when writing to a terminal.
pub(crate) struct ConsoleView<W: Write> {
    out: W,
    styled: bool,
}

impl ConsoleView<Stdout> {
    pub(crate) fn stdout() -> Self {
        let out = io::stdout();
        let styled = out.is_tty();
        Self {
            styled,
            ..Self::new(out)
        }
    }
}

impl<W: Write> ConsoleView<W> {
    pub(crate) fn new(out: W) -> Self {
        Self { out, styled: false }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> View for ConsoleView<W> {
    fn display_message(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }

    fn display_contacts(&mut self, contacts: &[ContactLine]) -> Result<()> {
        if contacts.is_empty() {
            return self.display_message(EMPTY_BOOK_MESSAGE);
        }
        let width = format::name_column_width(contacts.iter().map(|c| c.name.as_str()));
        for contact in contacts {
            let line = format::format_contact_line(&contact.name, &contact.phones, width);
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    fn display_help(&mut self) -> Result<()> {
        if self.styled {
            writeln!(self.out, "{}", style(HELP_TITLE).bold())?;
        } else {
            writeln!(self.out, "{}", HELP_TITLE)?;
        }
        for (index, line) in HELP_LINES.iter().enumerate() {
            writeln!(self.out, "{}. {}", index + 1, line)?;
        }
        Ok(())
    }

    fn display_error(&mut self, message: &str) -> Result<()> {
        if self.styled {
            writeln!(self.out, "{}", style(message).red())?;
            Ok(())
        } else {
            self.display_message(message)
        }
    }

    fn display_prompt(&mut self, prompt: &str) -> Result<()> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        Ok(())
    }
}
