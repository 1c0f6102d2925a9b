//! Mutable display model: screen buffer, icon mask, mode, alignment.

use crate::icons::IconMask;

/// Character cells on the panel (single line).
pub const WIDTH: usize = 20;

/// Which packet stream a flush emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Show the text buffer.
    #[default]
    Text,
    /// Show the controller's built-in clock.
    Clock,
}

impl DisplayMode {
    /// Recognize a mode name; anything but `text`/`txt`/`clock`/`clk` is
    /// rejected.
    pub fn parse(name: &str) -> Option<DisplayMode> {
        match name {
            "text" | "txt" => Some(DisplayMode::Text),
            "clock" | "clk" => Some(DisplayMode::Clock),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Text => "text",
            DisplayMode::Clock => "clock",
        }
    }
}

/// How text shorter than the panel is padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    Left,
    Right,
    #[default]
    Center,
}

impl TextStyle {
    /// Recognize a style name (`left`/`l`, `right`/`r`, `center`/`c`).
    pub fn parse(name: &str) -> Option<TextStyle> {
        match name {
            "left" | "l" => Some(TextStyle::Left),
            "right" | "r" => Some(TextStyle::Right),
            "center" | "c" => Some(TextStyle::Center),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TextStyle::Left => "left",
            TextStyle::Right => "right",
            TextStyle::Center => "center",
        }
    }
}

/// Mutable state for one attached panel.
///
/// `screen` always holds exactly [`WIDTH`] bytes: what the panel will show
/// after the next text flush.
#[derive(Debug, Clone)]
pub struct DisplayState {
    screen: [u8; WIDTH],
    icons: IconMask,
    mode: DisplayMode,
    text_style: TextStyle,
}

impl Default for DisplayState {
    fn default() -> Self {
        DisplayState::new()
    }
}

impl DisplayState {
    /// Fresh state: blank screen, no icons, text mode, centered style.
    pub fn new() -> DisplayState {
        DisplayState {
            screen: [0; WIDTH],
            icons: IconMask::EMPTY,
            mode: DisplayMode::default(),
            text_style: TextStyle::default(),
        }
    }

    /// Store `text` into the screen buffer, truncating past [`WIDTH`] bytes
    /// and padding per the active style. Input shorter than the panel
    /// zero-fills the buffer first; right and center styles then overwrite
    /// the padding with spaces, left leaves the trailing zero fill in place
    /// (readers trim trailing NULs, the panel shows them blank).
    pub fn set_text(&mut self, text: &[u8]) {
        let len = text.len().min(WIDTH);
        if text.len() < WIDTH {
            self.screen = [0; WIDTH];
        }
        match self.text_style {
            TextStyle::Left => {
                self.screen[..len].copy_from_slice(&text[..len]);
            }
            TextStyle::Right => {
                self.screen[..WIDTH - len].fill(b' ');
                self.screen[WIDTH - len..].copy_from_slice(&text[..len]);
            }
            TextStyle::Center => {
                self.screen.fill(b' ');
                // The extra pad byte of an odd remainder lands on the right.
                let start = (WIDTH - len) / 2;
                self.screen[start..start + len].copy_from_slice(&text[..len]);
            }
        }
    }

    pub fn screen(&self) -> &[u8; WIDTH] {
        &self.screen
    }

    pub fn icons(&self) -> IconMask {
        self.icons
    }

    pub fn set_icons(&mut self, icons: IconMask) {
        self.icons = icons;
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    pub fn text_style(&self) -> TextStyle {
        self.text_style
    }

    pub fn set_text_style(&mut self, style: TextStyle) {
        self.text_style = style;
    }
}
