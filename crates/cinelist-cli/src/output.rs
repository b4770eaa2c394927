use cinelist_core::{Card, Modal, Region};
use clap::ValueEnum;
use comfy_table::{presets, modifiers, Attribute, Cell, Color, ContentArrangement, Table};
use owo_colors::OwoColorize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        self.message("success", msg.as_ref(), |m| println!("{} {}", "✓".green(), m));
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        self.message("info", msg.as_ref(), |m| println!("{}", m));
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        self.message("warning", msg.as_ref(), |m| println!("{} {}", "⚠".yellow(), m));
    }

    /// Errors are shown even in quiet mode
    pub fn error(&self, msg: impl AsRef<str>) {
        match self.format {
            OutputFormat::Human => eprintln!("{} {}", "✗".red(), msg.as_ref()),
            _ => self.print_json(&json!({ "type": "error", "message": msg.as_ref() })),
        }
    }

    fn message(&self, kind: &str, msg: &str, human: impl FnOnce(&str)) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => human(msg),
            _ => self.print_json(&json!({ "type": kind, "message": msg })),
        }
    }

    pub fn json(&self, data: &serde_json::Value) {
        if self.quiet {
            return;
        }
        self.print_json(data);
    }

    fn print_json(&self, data: &serde_json::Value) {
        match self.format {
            OutputFormat::JsonPretty => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
            _ => println!("{}", serde_json::to_string(data).unwrap_or_default()),
        }
    }

    /// Draw a display region: a card table, a message, or nothing.
    pub fn region(&self, name: &str, region: &Region) {
        if self.quiet {
            return;
        }
        if !self.is_human() {
            self.print_json(&json!({ "type": "region", "region": name, "view": region }));
            return;
        }

        println!("\n{}", name.bright_cyan().bold());
        match region {
            Region::Blank => {}
            Region::Error(message) => println!("{}", message.red()),
            Region::Placeholder(message) => println!("{}", message.bright_black()),
            Region::Cards(cards) => println!("{}", card_table(cards)),
        }
    }

    pub fn modal(&self, modal: &Modal) {
        if self.quiet {
            return;
        }
        if !self.is_human() {
            self.print_json(&json!({ "type": "modal", "view": modal }));
            return;
        }

        match modal {
            Modal::Unavailable(message) => println!("\n{}", message.yellow()),
            Modal::Detail(view) => {
                let mut table = new_table();
                table.set_header(vec![
                    Cell::new(&view.title).fg(Color::Cyan).add_attribute(Attribute::Bold),
                    Cell::new(&view.id),
                ]);
                for (label, value) in [
                    ("Year", &view.year),
                    ("Rated", &view.rated),
                    ("Genre", &view.genre),
                    ("Director", &view.director),
                    ("Cast", &view.cast),
                    ("Plot", &view.plot),
                    ("Poster", &view.poster_url),
                ] {
                    table.add_row(vec![Cell::new(label).add_attribute(Attribute::Bold), Cell::new(value)]);
                }
                println!("\n{}", table);
            }
        }
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// One row per card; `#` is the card's position for shell shortcuts.
fn card_table(cards: &[Card]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["#", "Title", "Year", "Id", "Poster", "Actions"]);
    for (i, card) in cards.iter().enumerate() {
        let actions: Vec<&str> = card.actions.iter().map(|a| a.label()).collect();
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&card.title).add_attribute(Attribute::Bold),
            Cell::new(&card.year),
            Cell::new(&card.id),
            Cell::new(&card.poster_url),
            Cell::new(actions.join(" | ")),
        ]);
    }
    table
}

/// Keep the first and last two characters of a secret
pub fn mask_secret(s: &str) -> String {
    if s.is_empty() {
        return "<not set>".to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinelist_core::CardAction;

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret(""), "<not set>");
        assert_eq!(mask_secret("abcd"), "****");
        assert_eq!(mask_secret("ec015c87"), "ec***87");
    }

    #[test]
    fn test_card_table_lists_actions() {
        let cards = vec![Card {
            id: "tt1".to_string(),
            title: "Batman".to_string(),
            year: "1989".to_string(),
            poster_url: "https://example.com/p.jpg".to_string(),
            actions: vec![CardAction::Details, CardAction::AddToWatchlist],
        }];
        let rendered = card_table(&cards).to_string();
        assert!(rendered.contains("Batman"));
        assert!(rendered.contains("Details | Add to Watchlist"));
    }
}
