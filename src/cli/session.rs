use anyhow::Result;
use chrono::Local;
use std::io::BufRead;
use tracing::debug;

use crate::{
    app::AppContext,
    cli::{
        commands::{self, Flow},
        parser,
    },
    view::View,
};

pub(crate) const PROMPT: &str = "Enter a command: ";
const WELCOME_MESSAGE: &str = "Welcome to the assistant bot!";
const GOODBYE_MESSAGE: &str = "Goodbye!";

/// Reads commands until `close`/`exit` or end of input, then saves the book.
/// Input that is not valid UTF-8 is decoded lossily, so it reaches the
/// commands as replacement characters instead of ending the session.
pub(crate) fn run(
    app: &mut AppContext,
    view: &mut dyn View,
    mut input: impl BufRead,
) -> Result<()> {
    view.display_message(WELCOME_MESSAGE)?;

    let mut buf = Vec::new();
    loop {
        view.display_prompt(PROMPT)?;
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("end of input");
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let Some((keyword, args)) = parser::parse_input(&line) else {
            continue;
        };
        let today = Local::now().date_naive();
        if commands::dispatch(app.book_mut(), view, today, &keyword, &args)? == Flow::Exit {
            break;
        }
    }

    view.display_message(GOODBYE_MESSAGE)?;
    app.save()
}
