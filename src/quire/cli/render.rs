//! # Rendering
//!
//! Turns command results into terminal text. Every `render_*` function returns
//! a `String` so output can be tested without a terminal; the `*_internal`
//! variants take an explicit colour switch.
//!
//! Width math (truncation, right-aligned time column) uses display width from
//! `unicode-width`, since category icons and titles are rarely ASCII.

use super::styles::QUIRE_THEME;
use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use console::Style;
use quire::api::{CmdMessage, MessageLevel};
use quire::config::Settings;
use quire::peek::{format_as_peek, DEFAULT_PEEK_LINES};
use quire::tree::{reading_time_label, CatalogSummary, CatalogTree, FileNode, TreeNode};
use std::fmt::Display;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
const SEPARATOR: &str = "────────────────────────────────";

fn paint<D: Display>(style: &Style, text: D, use_color: Option<bool>) -> String {
    let style = match use_color {
        Some(c) => style.clone().force_styling(c),
        None => style.clone(),
    };
    style.apply_to(text).to_string()
}

pub fn render_tree(tree: &CatalogTree, summary: &CatalogSummary) -> String {
    render_tree_internal(tree, summary, None)
}

fn render_tree_internal(
    tree: &CatalogTree,
    summary: &CatalogSummary,
    use_color: Option<bool>,
) -> String {
    if tree.is_empty() {
        return String::new();
    }
    let theme = &*QUIRE_THEME;
    let mut out = String::new();

    for node in tree.nodes() {
        match node {
            TreeNode::Category(category) => {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(&paint(&theme.category, category.label(), use_color));
                out.push('\n');
            }
            TreeNode::File(file) => {
                out.push_str(&render_file_line(file, use_color));
                out.push('\n');
            }
        }
    }

    out.push('\n');
    out.push_str(&paint(&theme.footer, footer_text(summary), use_color));
    out.push('\n');
    out
}

fn render_file_line(file: &FileNode, use_color: Option<bool>) -> String {
    let theme = &*QUIRE_THEME;
    let doc = &file.document;

    let index = format!("{:>4}. ", file.index);
    let detail = file.detail();
    let time_ago = format_time_ago(doc.metadata().modified);

    let available = LINE_WIDTH.saturating_sub(index.width() + TIME_WIDTH);
    let name = truncate_to_width(doc.filename(), available);
    let detail = truncate_to_width(&detail, available.saturating_sub(name.width()));
    let padding = available.saturating_sub(name.width() + detail.width());

    format!(
        "{}{}{}{}{}",
        paint(&theme.index, index, use_color),
        paint(&theme.filename, name, use_color),
        paint(&theme.detail, detail, use_color),
        " ".repeat(padding),
        paint(&theme.detail, time_ago, use_color)
    )
}

pub fn footer_text(summary: &CatalogSummary) -> String {
    format!(
        "{} files • {} categories • {} words • ~{} min reading • Sorted by {}",
        summary.files,
        summary.categories,
        summary.words,
        summary.reading_minutes,
        summary.sort.label()
    )
}

pub fn render_full_documents(nodes: &[FileNode], peek: bool) -> String {
    render_full_documents_internal(nodes, peek, None)
}

fn render_full_documents_internal(
    nodes: &[FileNode],
    peek: bool,
    use_color: Option<bool>,
) -> String {
    let theme = &*QUIRE_THEME;
    let mut out = String::new();

    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let doc = &node.document;
        let meta = doc.metadata();
        out.push_str(&format!(
            "{} {}\n",
            paint(&theme.index, format!("{}.", node.index), use_color),
            paint(&theme.title, doc.title(), use_color)
        ));
        out.push_str(SEPARATOR);
        out.push('\n');

        let mut fields: Vec<(String, String)> = vec![
            ("path".into(), doc.path().display().to_string()),
            ("category".into(), doc.category()),
            (
                "modified".into(),
                format!(
                    "{} ({})",
                    meta.modified.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
                    format_time_ago(meta.modified).trim()
                ),
            ),
            (
                "length".into(),
                format!(
                    "{} words • {} chars • {} lines • {}",
                    meta.word_count,
                    meta.char_count,
                    meta.line_count,
                    reading_time_label(meta.reading_time)
                ),
            ),
        ];
        let tags = doc.tags();
        if !tags.is_empty() {
            fields.push(("tags".into(), tags.join(", ")));
        }
        for (key, value) in doc.header().iter() {
            if matches!(key.as_str(), "title" | "category" | "tags") {
                continue;
            }
            fields.push((key.clone(), value.to_string()));
        }
        for (key, value) in fields {
            let label = paint(&theme.field, format!("{}:", key), use_color);
            out.push_str(&format!("{} {}\n", label, value));
        }
        out.push_str(SEPARATOR);
        out.push('\n');

        if peek {
            out.push_str(&render_peek(doc.body(), use_color));
        } else if !doc.body().is_empty() {
            out.push_str(doc.body());
            out.push('\n');
        }
    }
    out
}

fn render_peek(body: &str, use_color: Option<bool>) -> String {
    let peek = format_as_peek(body, DEFAULT_PEEK_LINES);
    let mut out = String::new();
    if !peek.opening_lines.is_empty() {
        out.push_str(&peek.opening_lines);
        out.push('\n');
    }
    if let Some(count) = peek.truncated_count {
        let marker = format!("… {} lines not shown …", count);
        out.push_str(&paint(&QUIRE_THEME.footer, marker, use_color));
        out.push('\n');
    }
    if let Some(closing) = peek.closing_lines.filter(|c| !c.is_empty()) {
        out.push_str(&closing);
        out.push('\n');
    }
    out
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message);
    }
    lines.iter().map(|l| format!("{}\n", l)).collect()
}

pub fn render_settings(settings: &Settings) -> String {
    let lines = vec![
        format!("directory = {}", settings.directory.display()),
        format!("recursive = {}", settings.recursive),
        format!("sort = {}", settings.sort.name()),
        format!(
            "editor = {}",
            settings.editor.as_deref().unwrap_or("(auto)")
        ),
    ];
    render_text_list(&lines, "No configuration values.")
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let text = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", text)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
