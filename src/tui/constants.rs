//! TUI constants: colors, timing, layout sizes.

use ratatui::style::Color;

/// LinkedIn-blue accent (#00A0DC).
pub(super) const ACCENT: Color = Color::Rgb(0, 160, 220);

/// Secondary accent — turquoise (#40E0D0) from the welcome gradient.
pub(super) const ACCENT_SECONDARY: Color = Color::Rgb(64, 224, 208);

/// Deep LinkedIn blue (#0077B5) for client message borders.
pub(super) const PRIMARY: Color = Color::Rgb(0, 119, 181);

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Scroll amount for arrow keys.
pub(crate) const SCROLL_LINES_SMALL: usize = 3;

/// Scroll amount for PageUp/PageDown.
pub(crate) const SCROLL_LINES_PAGE: usize = 10;

/// Input textarea height (outer, including block borders).
pub(crate) const INPUT_LINES: u16 = 5;

/// How long toasts ("Copied", empty-input notice) stay visible.
pub(crate) const TOAST_SECS: u64 = 2;

/// Minimalist logo when idle (single character).
pub(super) const LOGO_IDLE: &str = "◆";

/// Spinner frames while a consultation is in flight (braille pattern).
pub(super) const LOGO_THINKING: &[&str] = &["⠋", "⠙", "⠹", "⠸"];
