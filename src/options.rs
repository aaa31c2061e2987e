//! Rendering options: palette, orientation and limits

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Node highlight color, drawn as an ANSI background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    Red,
    Green,
    Yellow,
    #[default]
    Blue,
    Pink,
    LightBlue,
    White,
    None,
}

impl Color {
    /// SGR background code, `None` for the uncolored palette entry.
    pub fn ansi_code(self) -> Option<&'static str> {
        match self {
            Color::Red => Some("41"),
            Color::Green => Some("42"),
            Color::Yellow => Some("43"),
            Color::Blue => Some("44"),
            Color::Pink => Some("45"),
            Color::LightBlue => Some("46"),
            Color::White => Some("47"),
            Color::None => None,
        }
    }

    /// Wraps `text` in this color's escape codes.
    // Not routed through `colored`: its NO_COLOR and tty checks would make
    // rendered output depend on the environment.
    pub fn paint(self, text: &str) -> String {
        match self.ansi_code() {
            Some(code) => format!("\u{1b}[{code}m{text}\u{1b}[0m"),
            None => text.to_string(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Pink => "pink",
            Color::LightBlue => "light-blue",
            Color::White => "white",
            Color::None => "none",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "blue" => Ok(Color::Blue),
            "pink" => Ok(Color::Pink),
            "light-blue" => Ok(Color::LightBlue),
            "white" => Ok(Color::White),
            "none" => Ok(Color::None),
            other => Err(format!("unknown color: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Vertical => f.write_str("vertical"),
            Orientation::Horizontal => f.write_str("horizontal"),
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vertical" => Ok(Orientation::Vertical),
            "horizontal" => Ok(Orientation::Horizontal),
            other => Err(format!("unknown orientation: {other}")),
        }
    }
}

pub const DEFAULT_RECURSION_LIMIT: usize = 512;

/// Options fixed for the lifetime of a [`crate::TreePrinter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub color: Color,
    /// Draw every node as a full box with top and bottom rules.
    pub border: bool,
    /// Show line breaks in labels as `\n` instead of splitting the box.
    pub escape_newlines: bool,
    /// Truncate labels longer than this and append `...`.
    pub trim_length: Option<usize>,
    /// Nodes at this depth are drawn without their descendants.
    pub max_depth: Option<usize>,
    pub orientation: Orientation,
    /// Hard cap on nesting, guards against cyclic adapters.
    pub recursion_limit: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: Color::Blue,
            border: false,
            escape_newlines: false,
            trim_length: None,
            max_depth: None,
            orientation: Orientation::Vertical,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

impl RenderOptions {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    pub fn with_escape_newlines(mut self, escape: bool) -> Self {
        self.escape_newlines = escape;
        self
    }

    pub fn with_trim_length(mut self, trim_length: Option<usize>) -> Self {
        self.trim_length = trim_length;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }
}

/// Maps the integer convention of config files (`-1` = unlimited) onto `Option`.
pub fn limit_from_int(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("red", Color::Red)]
    #[case("light-blue", Color::LightBlue)]
    #[case("LIGHT_BLUE", Color::LightBlue)]
    #[case(" none ", Color::None)]
    fn given_color_name_when_parsing_then_returns_palette_entry(
        #[case] input: &str,
        #[case] expected: Color,
    ) {
        assert_eq!(input.parse::<Color>().unwrap(), expected);
    }

    #[test]
    fn given_unknown_color_when_parsing_then_fails() {
        assert!("magenta".parse::<Color>().is_err());
    }

    #[test]
    fn given_palette_when_mapping_codes_then_backgrounds_are_41_to_47() {
        assert_eq!(Color::Red.ansi_code(), Some("41"));
        assert_eq!(Color::White.ansi_code(), Some("47"));
        assert_eq!(Color::None.ansi_code(), None);
    }

    #[rstest]
    #[case(-1, None)]
    #[case(-7, None)]
    #[case(0, Some(0))]
    #[case(12, Some(12))]
    fn given_integer_limit_when_converting_then_negative_is_unlimited(
        #[case] value: i64,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(limit_from_int(value), expected);
    }

    #[test]
    fn given_defaults_then_blue_vertical_unlimited() {
        let opts = RenderOptions::default();
        assert_eq!(opts.color, Color::Blue);
        assert_eq!(opts.orientation, Orientation::Vertical);
        assert!(!opts.border);
        assert!(opts.trim_length.is_none());
        assert!(opts.max_depth.is_none());
    }
}
