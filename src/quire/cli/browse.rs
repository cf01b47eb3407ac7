//! # Browse Loop
//!
//! A line-oriented interactive mode over one [`QuireApi`] session. Each input
//! line is one command; the tree is reprinted after anything that changes it.
//! Failures from a single command are reported and the loop carries on, so a
//! typo or a vanished file never ends the session.

use super::render::{render_full_documents, render_messages, render_tree};
use super::styles::QUIRE_THEME;
use quire::api::QuireApi;
use quire::error::Result;
use quire::sort::SortPolicy;
use std::io::{BufRead, Write};

pub const HELP: &str = "\
Commands:
  r, refresh        rescan the directory
  l, list           show the tree again
  sort NAME         sort by date_desc, date_asc, title or word_count
  1 2 3 4           sort by newest, oldest, title, words
  o N, open N       open document N in the editor
  v N, view N       show document N
  ?, help           show this help
  q, quit           leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Refresh,
    List,
    Sort(SortPolicy),
    Open(String),
    View(String),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_browse_command(line: &str) -> BrowseCommand {
    let line = line.trim();
    let (word, arg) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match (word, arg) {
        ("", _) => BrowseCommand::Empty,
        ("r" | "refresh", "") => BrowseCommand::Refresh,
        ("l" | "list", "") => BrowseCommand::List,
        ("?" | "h" | "help", "") => BrowseCommand::Help,
        ("q" | "quit" | "exit", "") => BrowseCommand::Quit,
        ("sort" | "s", name) if !name.is_empty() => {
            BrowseCommand::Sort(SortPolicy::from_name(name))
        }
        ("o" | "open", sel) if !sel.is_empty() => BrowseCommand::Open(sel.to_string()),
        ("v" | "view", sel) if !sel.is_empty() => BrowseCommand::View(sel.to_string()),
        (digit, "") if digit.len() == 1 => match digit.parse::<usize>() {
            Ok(n @ 1..=4) => BrowseCommand::Sort(SortPolicy::ALL[n - 1]),
            _ => BrowseCommand::Unknown(line.to_string()),
        },
        _ => BrowseCommand::Unknown(line.to_string()),
    }
}

/// Runs until `q` or end of input.
pub fn run_loop<R: BufRead, W: Write>(api: &mut QuireApi, input: R, out: &mut W) -> Result<()> {
    print_tree(api, out)?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;
        let command = parse_browse_command(&line);
        if command == BrowseCommand::Quit {
            break;
        }
        if let Err(e) = dispatch(api, command, out) {
            writeln!(out, "Error: {}", e)?;
        }
        prompt(out)?;
    }
    Ok(())
}

fn dispatch<W: Write>(api: &mut QuireApi, command: BrowseCommand, out: &mut W) -> Result<()> {
    match command {
        BrowseCommand::Refresh => {
            api.refresh()?;
            print_tree(api, out)
        }
        BrowseCommand::List => print_tree(api, out),
        BrowseCommand::Sort(policy) => {
            api.set_sort(policy)?;
            writeln!(out, "Sorted by {}", policy.description())?;
            print_tree(api, out)
        }
        BrowseCommand::Open(selector) => {
            let result = api.open(&selector)?;
            write!(out, "{}", render_messages(&result.messages))?;
            print_tree(api, out)
        }
        BrowseCommand::View(selector) => {
            let result = api.view(&[selector])?;
            write!(out, "{}", render_full_documents(&result.listed, false))?;
            Ok(())
        }
        BrowseCommand::Help => {
            write!(out, "{}", HELP)?;
            Ok(())
        }
        BrowseCommand::Empty | BrowseCommand::Quit => Ok(()),
        BrowseCommand::Unknown(line) => {
            writeln!(out, "Unknown command: {} (type ? for help)", line)?;
            Ok(())
        }
    }
}

fn print_tree<W: Write>(api: &QuireApi, out: &mut W) -> Result<()> {
    let result = api.list()?;
    if let (Some(tree), Some(summary)) = (&result.tree, &result.summary) {
        write!(out, "{}", render_tree(tree, summary))?;
    }
    write!(out, "{}", render_messages(&result.messages))?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "{} ", QUIRE_THEME.prompt.apply_to("quire>"))?;
    out.flush()?;
    Ok(())
}
