use super::{build_controller, prompts};
use crate::output::Output;
use crate::spinner::RequestSpinner;
use cinelist_core::{ControllerError, ModalClick};
use cinelist_models::MovieSummary;
use color_eyre::Result;

const HELP: &str = "\
Commands:
  search <term>       search the catalog
  add <id|#n>         add a result to the watchlist (#n = result number)
  remove <id|#n>      remove from the watchlist (#n = watchlist number)
  details <id|#n|w#n> show details (#n = result number, w#n = watchlist number)
  close               close the details view
  list                show the watchlist
  clear               empty the watchlist
  help                show this help
  quit                leave";

/// A card referenced by catalog id or by its 1-based position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Id(String),
    /// `#n`: position in the list the command works on
    Position(usize),
    /// `w#n`: position in the watchlist
    Saved(usize),
}

/// Which list a bare `#n` counts in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardList {
    Results,
    Watchlist,
}

fn parse_position(n: &str) -> Option<usize> {
    n.parse::<usize>().ok().filter(|&n| n > 0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Add(Target),
    Remove(Target),
    Details(Target),
    Close,
    List,
    Clear,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_target(arg: &str) -> Option<Target> {
    let arg = arg.trim();
    if arg.is_empty() {
        return None;
    }
    if let Some(n) = arg.strip_prefix("w#").or_else(|| arg.strip_prefix("W#")) {
        return parse_position(n).map(Target::Saved);
    }
    match arg.strip_prefix('#') {
        Some(n) => parse_position(n).map(Target::Position),
        None => Some(Target::Id(arg.to_string())),
    }
}

pub fn parse_command(line: &str) -> ShellCommand {
    let line = line.trim();
    if line.is_empty() {
        return ShellCommand::Empty;
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let with_target = |make: fn(Target) -> ShellCommand| {
        parse_target(rest)
            .map(make)
            .unwrap_or_else(|| ShellCommand::Unknown(line.to_string()))
    };

    match verb.to_lowercase().as_str() {
        "search" | "s" if !rest.is_empty() => ShellCommand::Search(rest.to_string()),
        "add" | "a" => with_target(ShellCommand::Add),
        "remove" | "rm" => with_target(ShellCommand::Remove),
        "details" | "d" => with_target(ShellCommand::Details),
        "close" => ShellCommand::Close,
        "list" | "ls" => ShellCommand::List,
        "clear" => ShellCommand::Clear,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        _ => ShellCommand::Unknown(line.to_string()),
    }
}

/// Catalog id behind a target; `None` when the position is out of range
fn resolve(target: &Target, list: CardList, results: &[MovieSummary], saved: &[MovieSummary]) -> Option<String> {
    let (movies, n) = match (target, list) {
        (Target::Id(id), _) => return Some(id.clone()),
        (Target::Saved(n), _) | (Target::Position(n), CardList::Watchlist) => (saved, *n),
        (Target::Position(n), CardList::Results) => (results, *n),
    };
    n.checked_sub(1).and_then(|i| movies.get(i)).map(|m| m.id.clone())
}

/// While details are open, every command except `close` counts as a click
/// outside them
fn modal_click_for(command: &ShellCommand) -> Option<ModalClick> {
    match command {
        ShellCommand::Close | ShellCommand::Empty => None,
        _ => Some(ModalClick::Backdrop),
    }
}

pub async fn run_shell(output: &Output) -> Result<()> {
    let (mut controller, _) = build_controller()?;

    output.info("cinelist interactive session. Type 'help' for commands.");
    output.region("Watchlist", &controller.view().watchlist);

    loop {
        let line = prompts::prompt_line("cinelist")?;
        let command = parse_command(&line);

        if controller.is_modal_open() {
            if let Some(click) = modal_click_for(&command) {
                controller.click_modal(click);
            }
        }

        match command {
            ShellCommand::Empty => {}
            ShellCommand::Quit => break,
            ShellCommand::Help => output.info(HELP),
            ShellCommand::Unknown(input) => {
                output.warn(format!("Unrecognized command: '{}'. Type 'help' for commands.", input));
            }
            ShellCommand::Search(term) => {
                let spinner = RequestSpinner::start(format!("Searching for '{}'...", term), output.is_human());
                controller.submit_search(&term).await;
                spinner.finish();
                output.region("Results", &controller.view().results);
            }
            ShellCommand::Add(target) => {
                let Some(id) = resolve(&target, CardList::Results, controller.results(), controller.store().snapshot()) else {
                    output.warn("No such result");
                    continue;
                };
                match controller.add_to_watchlist(&id) {
                    Ok(true) => output.region("Watchlist", &controller.view().watchlist),
                    Ok(false) => output.info(format!("{} is already in your watchlist", id)),
                    Err(ControllerError::UnknownResult(id)) => {
                        output.warn(format!("{} is not in the current results; search for it first", id));
                    }
                    Err(e) => output.error(format!("Failed to save watchlist: {}", e)),
                }
            }
            ShellCommand::Remove(target) => {
                let Some(id) = resolve(&target, CardList::Watchlist, controller.results(), controller.store().snapshot()) else {
                    output.warn("No such watchlist entry");
                    continue;
                };
                match controller.remove_from_watchlist(&id) {
                    Ok(_) => output.region("Watchlist", &controller.view().watchlist),
                    Err(e) => output.error(format!("Failed to save watchlist: {}", e)),
                }
            }
            ShellCommand::Details(target) => {
                let Some(id) = resolve(&target, CardList::Results, controller.results(), controller.store().snapshot()) else {
                    output.warn("No such movie");
                    continue;
                };
                let spinner = RequestSpinner::start(format!("Fetching details for {}...", id), output.is_human());
                controller.show_details(&id).await;
                spinner.finish();
                if let Some(modal) = &controller.view().modal {
                    output.modal(modal);
                }
            }
            ShellCommand::Close => controller.close_modal(),
            ShellCommand::List => output.region("Watchlist", &controller.view().watchlist),
            ShellCommand::Clear => match controller.clear_watchlist() {
                Ok(n) => {
                    output.success(format!("Removed {} movie(s)", n));
                    output.region("Watchlist", &controller.view().watchlist);
                }
                Err(e) => output.error(format!("Failed to save watchlist: {}", e)),
            },
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_keeps_whole_term() {
        assert_eq!(
            parse_command("search  the dark knight "),
            ShellCommand::Search("the dark knight".to_string())
        );
        assert_eq!(parse_command("search"), ShellCommand::Unknown("search".to_string()));
    }

    #[test]
    fn test_parse_targets() {
        assert_eq!(parse_command("add tt0372784"), ShellCommand::Add(Target::Id("tt0372784".to_string())));
        assert_eq!(parse_command("rm #2"), ShellCommand::Remove(Target::Position(2)));
        assert_eq!(parse_command("DETAILS #1"), ShellCommand::Details(Target::Position(1)));
        assert_eq!(parse_command("add #0"), ShellCommand::Unknown("add #0".to_string()));
        assert_eq!(parse_command("add #x"), ShellCommand::Unknown("add #x".to_string()));
        assert_eq!(parse_command("add"), ShellCommand::Unknown("add".to_string()));
        assert_eq!(parse_command("details w#3"), ShellCommand::Details(Target::Saved(3)));
        assert_eq!(parse_command("details w#0"), ShellCommand::Unknown("details w#0".to_string()));
    }

    fn movies(ids: &[&str]) -> Vec<MovieSummary> {
        ids.iter().map(|id| MovieSummary::new(*id, "T", "2000", "N/A")).collect()
    }

    #[test]
    fn test_resolve_positions_against_the_right_list() {
        let results = movies(&["tt1", "tt2"]);
        let saved = movies(&["tt9"]);

        assert_eq!(resolve(&Target::Position(2), CardList::Results, &results, &saved).as_deref(), Some("tt2"));
        assert_eq!(resolve(&Target::Position(1), CardList::Watchlist, &results, &saved).as_deref(), Some("tt9"));
        // w#n reaches saved movies even from a results command
        assert_eq!(resolve(&Target::Saved(1), CardList::Results, &results, &saved).as_deref(), Some("tt9"));
        assert_eq!(resolve(&Target::Position(3), CardList::Results, &results, &saved), None);
        assert_eq!(resolve(&Target::Saved(2), CardList::Results, &[], &saved), None);
        assert_eq!(
            resolve(&Target::Id("tt404".to_string()), CardList::Results, &[], &[]).as_deref(),
            Some("tt404")
        );
    }

    #[test]
    fn test_open_details_close_on_any_other_command() {
        assert_eq!(modal_click_for(&ShellCommand::Close), None);
        assert_eq!(modal_click_for(&ShellCommand::Empty), None);

        for command in [
            ShellCommand::Search("batman".to_string()),
            ShellCommand::List,
            ShellCommand::Add(Target::Position(1)),
            ShellCommand::Details(Target::Saved(1)),
            ShellCommand::Unknown("dance".to_string()),
        ] {
            assert_eq!(modal_click_for(&command), Some(ModalClick::Backdrop), "{:?}", command);
        }
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command(""), ShellCommand::Empty);
        assert_eq!(parse_command("close"), ShellCommand::Close);
        assert_eq!(parse_command("ls"), ShellCommand::List);
        assert_eq!(parse_command("exit"), ShellCommand::Quit);
        assert_eq!(parse_command("dance"), ShellCommand::Unknown("dance".to_string()));
    }
}
