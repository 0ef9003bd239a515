use crate::view::SubscriptionView;
use inquire::{InquireError, Text, error::InquireResult};
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};
use tabled::{builder::Builder, settings::Style};

const HEADER: [&str; 4] = ["Index", "Alias", "Name", "ID"];
const PROMPT: &str = "Enter Index, Alias, Name or ID to select:";

pub fn render_table(views: &[SubscriptionView]) -> String {
    let mut builder = Builder::default();
    builder.push_record(HEADER.map(|title| title.green().underline().to_string()));

    for view in views {
        let id = match view.selected {
            true => view.id.white().on_blue().to_string(),
            false => view.id.clone(),
        };

        builder.push_record([
            view.index.yellow().to_string(),
            view.alias_label().to_string(),
            view.name.clone(),
            id,
        ]);
    }

    let mut table = builder.build();
    table.with(Style::blank());
    table.to_string()
}

/// Prompts on the terminal, or reads one line from stdin when it is piped.
pub fn prompt_selection() -> InquireResult<String> {
    match Text::new(PROMPT).prompt() {
        Err(InquireError::NotTTY) => {
            print!("{} ", PROMPT.green());
            io::stdout().flush().map_err(InquireError::IO)?;
            read_line(&mut io::stdin().lock()).map_err(InquireError::IO)
        }
        other => other,
    }
}

fn read_line(reader: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
