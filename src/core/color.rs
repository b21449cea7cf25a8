//! Color identifiers and the palette that paints text with them
//!
//! Colors form a closed set so that a misspelled color is rejected while the
//! configuration is loaded, never while a line is being logged.

use super::error::LoggerError;
use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported foreground color
///
/// Parsing is lenient about spelling: `"red"`, `"redBright"`, `"bright_red"`
/// and `"BRIGHT-RED"` all resolve, and `gray`/`grey`/`blackBright` are the
/// same color.
///
/// # Examples
///
/// ```
/// use relogger::ColorId;
///
/// let color: ColorId = "cyanBright".parse().unwrap();
/// assert_eq!(color, ColorId::BrightCyan);
/// assert_eq!(color.as_str(), "bright_cyan");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ColorId {
    Black,
    Red,
    #[default]
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl ColorId {
    pub const ALL: [ColorId; 16] = [
        ColorId::Black,
        ColorId::Red,
        ColorId::Green,
        ColorId::Yellow,
        ColorId::Blue,
        ColorId::Magenta,
        ColorId::Cyan,
        ColorId::White,
        ColorId::Gray,
        ColorId::BrightRed,
        ColorId::BrightGreen,
        ColorId::BrightYellow,
        ColorId::BrightBlue,
        ColorId::BrightMagenta,
        ColorId::BrightCyan,
        ColorId::BrightWhite,
    ];

    /// Canonical snake_case name
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorId::Black => "black",
            ColorId::Red => "red",
            ColorId::Green => "green",
            ColorId::Yellow => "yellow",
            ColorId::Blue => "blue",
            ColorId::Magenta => "magenta",
            ColorId::Cyan => "cyan",
            ColorId::White => "white",
            ColorId::Gray => "gray",
            ColorId::BrightRed => "bright_red",
            ColorId::BrightGreen => "bright_green",
            ColorId::BrightYellow => "bright_yellow",
            ColorId::BrightBlue => "bright_blue",
            ColorId::BrightMagenta => "bright_magenta",
            ColorId::BrightCyan => "bright_cyan",
            ColorId::BrightWhite => "bright_white",
        }
    }

    pub fn color_code(&self) -> Color {
        match self {
            ColorId::Black => Color::Black,
            ColorId::Red => Color::Red,
            ColorId::Green => Color::Green,
            ColorId::Yellow => Color::Yellow,
            ColorId::Blue => Color::Blue,
            ColorId::Magenta => Color::Magenta,
            ColorId::Cyan => Color::Cyan,
            ColorId::White => Color::White,
            ColorId::Gray => Color::BrightBlack,
            ColorId::BrightRed => Color::BrightRed,
            ColorId::BrightGreen => Color::BrightGreen,
            ColorId::BrightYellow => Color::BrightYellow,
            ColorId::BrightBlue => Color::BrightBlue,
            ColorId::BrightMagenta => Color::BrightMagenta,
            ColorId::BrightCyan => Color::BrightCyan,
            ColorId::BrightWhite => Color::BrightWhite,
        }
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorId {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "redBright", "bright_red" and "bright-red" all fold to "brightred"
        let folded: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        let folded = match folded.strip_suffix("bright") {
            Some(base) if !base.is_empty() => format!("bright{}", base),
            _ => folded,
        };

        match folded.as_str() {
            "black" => Ok(ColorId::Black),
            "red" => Ok(ColorId::Red),
            "green" => Ok(ColorId::Green),
            "yellow" => Ok(ColorId::Yellow),
            "blue" => Ok(ColorId::Blue),
            "magenta" => Ok(ColorId::Magenta),
            "cyan" => Ok(ColorId::Cyan),
            "white" => Ok(ColorId::White),
            "gray" | "grey" | "brightblack" => Ok(ColorId::Gray),
            "brightred" => Ok(ColorId::BrightRed),
            "brightgreen" => Ok(ColorId::BrightGreen),
            "brightyellow" => Ok(ColorId::BrightYellow),
            "brightblue" => Ok(ColorId::BrightBlue),
            "brightmagenta" => Ok(ColorId::BrightMagenta),
            "brightcyan" => Ok(ColorId::BrightCyan),
            "brightwhite" => Ok(ColorId::BrightWhite),
            _ => Err(LoggerError::color_not_found(s)),
        }
    }
}

impl TryFrom<String> for ColorId {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for ColorId {
    type Error = LoggerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ColorId> for String {
    fn from(color: ColorId) -> Self {
        color.as_str().to_string()
    }
}

/// When to emit ANSI color codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Follow `colored`'s terminal detection (`NO_COLOR`, `CLICOLOR`, TTY)
    #[default]
    Auto,
    Always,
    Never,
}

/// Applies [`ColorId`]s to text according to a [`ColorMode`]
///
/// `Auto` is resolved once, when the palette is created, against the sink
/// the lines are going to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    mode: ColorMode,
    enabled: bool,
}

impl Palette {
    /// Palette for a terminal, `Auto` following `colored`'s detection
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::for_sink(mode, colored::control::SHOULD_COLORIZE.should_colorize())
    }

    /// Palette for a sink, `Auto` enabled only when the sink supports color
    #[must_use]
    pub fn for_sink(mode: ColorMode, sink_supports_color: bool) -> Self {
        let enabled = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => sink_supports_color,
        };
        Self { mode, enabled }
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Whether [`Palette::paint`] emits escape codes
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Wrap `text` in the escape codes for `color`, or return it unchanged
    /// when coloring is disabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use relogger::{ColorId, ColorMode, Palette};
    ///
    /// let palette = Palette::new(ColorMode::Always);
    /// assert_eq!(palette.paint("INFO", ColorId::Blue), "\x1b[34mINFO\x1b[0m");
    ///
    /// let plain = Palette::new(ColorMode::Never);
    /// assert_eq!(plain.paint("INFO", ColorId::Blue), "INFO");
    /// ```
    pub fn paint(&self, text: &str, color: ColorId) -> String {
        if !self.enabled {
            return text.to_string();
        }
        if colored::control::SHOULD_COLORIZE.should_colorize() {
            text.color(color.color_code()).to_string()
        } else {
            // `colored` would strip the codes here
            format!("\x1b[{}m{}\x1b[0m", color.color_code().to_fg_str(), text)
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_names() {
        assert_eq!("red".parse::<ColorId>().unwrap(), ColorId::Red);
        assert_eq!("Cyan".parse::<ColorId>().unwrap(), ColorId::Cyan);
        assert_eq!("WHITE".parse::<ColorId>().unwrap(), ColorId::White);
    }

    #[test]
    fn test_parse_bright_spellings() {
        for input in ["redBright", "bright_red", "bright-red", "BrightRed"] {
            assert_eq!(input.parse::<ColorId>().unwrap(), ColorId::BrightRed, "{}", input);
        }
    }

    #[test]
    fn test_gray_aliases() {
        for input in ["gray", "grey", "blackBright", "bright_black"] {
            assert_eq!(input.parse::<ColorId>().unwrap(), ColorId::Gray, "{}", input);
        }
    }

    #[test]
    fn test_unknown_color_is_rejected() {
        let err = "chartreuse".parse::<ColorId>().unwrap_err();
        assert!(matches!(err, LoggerError::ColorNotFound { ref color } if color == "chartreuse"));

        assert!("bright".parse::<ColorId>().is_err());
        assert!("".parse::<ColorId>().is_err());
    }

    #[test]
    fn test_canonical_name_roundtrip() {
        for color in ColorId::ALL {
            assert_eq!(color.as_str().parse::<ColorId>().unwrap(), color);
            assert_eq!(color.to_string(), color.as_str());
        }
    }

    #[test]
    fn test_default_is_green() {
        assert_eq!(ColorId::default(), ColorId::Green);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&ColorId::BrightBlue).unwrap();
        assert_eq!(json, "\"bright_blue\"");

        let color: ColorId = serde_json::from_str("\"magentaBright\"").unwrap();
        assert_eq!(color, ColorId::BrightMagenta);

        assert!(serde_json::from_str::<ColorId>("\"purple\"").is_err());

        let mode: ColorMode = serde_json::from_str("\"never\"").unwrap();
        assert_eq!(mode, ColorMode::Never);
    }

    #[test]
    fn test_paint_always() {
        let palette = Palette::new(ColorMode::Always);
        assert!(palette.is_enabled());
        assert_eq!(palette.paint("x", ColorId::Red), "\x1b[31mx\x1b[0m");
        assert_eq!(palette.paint("x", ColorId::Gray), "\x1b[90mx\x1b[0m");
        assert_eq!(palette.paint("x", ColorId::BrightCyan), "\x1b[96mx\x1b[0m");
    }

    #[test]
    fn test_auto_follows_sink_support() {
        let plain = Palette::for_sink(ColorMode::Auto, false);
        assert_eq!(plain.mode(), ColorMode::Auto);
        assert!(!plain.is_enabled());
        assert_eq!(plain.paint("INFO", ColorId::Blue), "INFO");

        let colored = Palette::for_sink(ColorMode::Auto, true);
        assert!(colored.is_enabled());
        assert_eq!(colored.paint("INFO", ColorId::Blue), "\x1b[34mINFO\x1b[0m");
    }

    #[test]
    fn test_forced_modes_ignore_sink_support() {
        assert!(Palette::for_sink(ColorMode::Always, false).is_enabled());
        assert_eq!(
            Palette::for_sink(ColorMode::Always, false).paint("x", ColorId::Yellow),
            "\x1b[33mx\x1b[0m"
        );
        assert!(!Palette::for_sink(ColorMode::Never, true).is_enabled());
    }

    #[test]
    fn test_paint_never_is_passthrough() {
        let palette = Palette::new(ColorMode::Never);
        assert!(!palette.is_enabled());
        for color in ColorId::ALL {
            assert_eq!(palette.paint("[01.01.2025 | 00:00:00]", color), "[01.01.2025 | 00:00:00]");
        }
    }
}
