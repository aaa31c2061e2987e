//! Tells node fragments apart from connector lines and spacing.

use crate::format::{width, H_RULE, V_RULE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// Part of a node: `[label]`, a `│…│` box row or a bare box rule.
    Node,
    /// Connector lines and padding.
    Structure,
    /// Fragment led by an ASCII `|` label marker; nothing produces these yet.
    LabelMarker,
}

pub fn classify(fragment: &str) -> FragmentKind {
    let mut chars = fragment.chars();
    let Some(first) = chars.next() else {
        return FragmentKind::Structure;
    };
    if first == '[' || (first == V_RULE && width(fragment.trim_end()) > 1) {
        return FragmentKind::Node;
    }
    if first == '|' {
        return FragmentKind::LabelMarker;
    }
    if is_bare_rule(fragment) {
        FragmentKind::Node
    } else {
        FragmentKind::Structure
    }
}

/// `┌──┐` or `└──┘` with nothing but horizontal rules inside.
fn is_bare_rule(fragment: &str) -> bool {
    let chars: Vec<char> = fragment.chars().collect();
    if chars.len() < 2 {
        return false;
    }
    let interior = &chars[1..chars.len() - 1];
    let ends = (chars[0], chars[chars.len() - 1]);
    matches!(ends, ('┌', '┐') | ('└', '┘')) && interior.iter().all(|&c| c == H_RULE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("[x]", FragmentKind::Node)]
    #[case("[]", FragmentKind::Node)]
    #[case("│ab│", FragmentKind::Node)]
    #[case("┌──┐", FragmentKind::Node)]
    #[case("└┘", FragmentKind::Node)]
    #[case("", FragmentKind::Structure)]
    #[case("   ", FragmentKind::Structure)]
    #[case("│", FragmentKind::Structure)]
    #[case("│  ", FragmentKind::Structure)]
    #[case("   │", FragmentKind::Structure)]
    #[case(" ┌─┴─┐", FragmentKind::Structure)]
    #[case("┌─┴─┐", FragmentKind::Structure)]
    #[case("┌──┘", FragmentKind::Structure)]
    #[case("|label", FragmentKind::LabelMarker)]
    fn given_fragment_when_classifying_then_kind_matches(
        #[case] fragment: &str,
        #[case] expected: FragmentKind,
    ) {
        assert_eq!(classify(fragment), expected);
    }
}
