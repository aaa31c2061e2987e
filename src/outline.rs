//! Indented outline → [`TreeArena`].
//!
//! ```text
//! root
//!   child one
//!     grandchild
//!   child two\nsecond line
//! ```
//!
//! Each non-blank line is a node. Deeper indentation than the line above
//! opens a child, equal or shallower indentation closes nodes until a
//! shallower ancestor is found. `\n` inside a line is a line break in the
//! label.

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::arena::TreeArena;
use crate::errors::OutlineError;

const TAB_WIDTH: usize = 4;

#[instrument(level = "debug", skip(text))]
pub fn parse_outline(text: &str) -> Result<TreeArena, OutlineError> {
    let mut arena = TreeArena::new();
    // open ancestors of the next line: (indent, node)
    let mut open: Vec<(usize, Index)> = Vec::new();

    for (line_no, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        let indent = indent_width(raw);
        while open.last().is_some_and(|&(level, _)| level >= indent) {
            open.pop();
        }

        let parent = open.last().map(|&(_, idx)| idx);
        if parent.is_none() && arena.root().is_some() {
            return Err(OutlineError::MultipleRoots { line: line_no + 1 });
        }

        let label = raw.trim().replace(r"\n", "\n");
        let idx = arena.insert_node(label, parent);
        open.push((indent, idx));
    }

    if arena.is_empty() {
        return Err(OutlineError::Empty);
    }
    debug!(nodes = arena.len(), depth = arena.depth(), "parsed outline");
    Ok(arena)
}

fn indent_width(line: &str) -> usize {
    line.chars()
        .take_while(|c| c.is_whitespace())
        .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::TreeAdapter;

    fn labels(arena: &TreeArena, node: Index) -> Vec<String> {
        arena
            .children(&node)
            .into_iter()
            .flatten()
            .map(|c| arena.label(&c))
            .collect()
    }

    #[test]
    fn given_nested_outline_when_parsing_then_builds_hierarchy() {
        let arena = parse_outline("root\n  a\n    a1\n  b\n").unwrap();
        let root = arena.root().unwrap();

        assert_eq!(arena.label(&root), "root");
        assert_eq!(labels(&arena, root), vec!["a", "b"]);
        assert_eq!(arena.depth(), 3);
        assert_eq!(arena.len(), 4);
    }

    #[test]
    fn given_blank_lines_and_tabs_when_parsing_then_ignored_and_expanded() {
        let arena = parse_outline("root\n\n\tchild\n        grandchild\n").unwrap();
        assert_eq!(arena.depth(), 3);
    }

    #[test]
    fn given_dedent_to_middle_level_when_parsing_then_attaches_to_matching_ancestor() {
        let arena = parse_outline("r\n  a\n      deep\n   b\n").unwrap();
        let root = arena.root().unwrap();
        // `b` is shallower than `deep` but deeper than `a`, so it is a child of `a`
        assert_eq!(labels(&arena, root), vec!["a"]);
    }

    #[test]
    fn given_escaped_newline_when_parsing_then_label_has_line_break() {
        let arena = parse_outline(r"root\nsecond").unwrap();
        let root = arena.root().unwrap();
        assert_eq!(arena.label(&root), "root\nsecond");
    }

    #[test]
    fn given_two_roots_when_parsing_then_fails_with_line_number() {
        let err = parse_outline("one\n  child\ntwo\n").unwrap_err();
        assert_eq!(err, OutlineError::MultipleRoots { line: 3 });
    }

    #[test]
    fn given_blank_input_when_parsing_then_empty_error() {
        assert_eq!(parse_outline("  \n\n").unwrap_err(), OutlineError::Empty);
    }
}
