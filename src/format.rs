//! Node value and box formatting
//!
//! A label becomes one or more equal-width lines, and those lines become
//! either a bracketed `[label]` or a `│…│` box, optionally closed by
//! `┌─┐`/`└─┘` rules.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::layout::Row;

pub const H_RULE: char = '─';
pub const V_RULE: char = '│';
pub const ELLIPSIS: &str = "...";

/// Real line breaks and the literal text `\n`.
static NEWLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\\n|\n)").expect("newline pattern is valid"));

/// Display width in cells; box-drawing glyphs count as one.
pub fn width(s: &str) -> usize {
    s.chars().count()
}

pub fn row_width(row: &[String]) -> usize {
    row.iter().map(|f| width(f)).sum()
}

/// Splits a label into lines padded to a common width.
///
/// Trimming happens before escaping, so an escaped break never counts
/// towards the trim length twice.
pub fn value_lines(label: &str, trim_length: Option<usize>, escape_newlines: bool) -> Vec<String> {
    let mut value = label.to_string();
    if let Some(limit) = trim_length {
        if width(&value) > limit {
            value = value.chars().take(limit).collect::<String>() + ELLIPSIS;
        }
    }
    if escape_newlines {
        value = NEWLINE_RE
            .replace_all(&value, |caps: &Captures| {
                if &caps[0] == "\n" {
                    r"\n"
                } else {
                    r"\\n"
                }
            })
            .into_owned();
    }
    if !value.contains('\n') {
        return vec![value];
    }

    let lines: Vec<&str> = value.split('\n').collect();
    let longest = lines.iter().map(|l| width(l)).max().unwrap_or(0);
    lines
        .into_iter()
        .map(|l| format!("{l}{}", " ".repeat(longest - width(l))))
        .collect()
}

/// Rows for a node's own value, prefixed by `spacing`.
///
/// A single line is always `[label]`; only multi-line values become boxes.
pub fn node_rows(spacing: &str, lines: &[String], border: bool) -> Vec<Row> {
    match lines {
        [line] => {
            let bracketed = format!("[{line}]");
            if spacing.is_empty() {
                vec![vec![bracketed]]
            } else {
                vec![vec![spacing.to_string(), bracketed]]
            }
        }
        _ => format_box(spacing, lines, border),
    }
}

pub fn format_box(spacing: &str, lines: &[String], border: bool) -> Vec<Row> {
    let inner = lines.first().map_or(0, |l| width(l));
    let rule = H_RULE.to_string().repeat(inner);
    let mut rows = Vec::with_capacity(lines.len() + 2);
    if border {
        rows.push(vec![spacing.to_string(), format!("┌{rule}┐")]);
    }
    rows.extend(
        lines
            .iter()
            .map(|l| vec![spacing.to_string(), format!("{V_RULE}{l}{V_RULE}")]),
    );
    if border {
        rows.push(vec![spacing.to_string(), format!("└{rule}┘")]);
    }
    rows
}
