//! Site theme - the dark editorial palette every page shares.

use crate::types::Rgba;

/// Page background.
pub const BG: Rgba = Rgba::rgb(12, 12, 14);

/// Body text.
pub const FG: Rgba = Rgba::rgb(226, 223, 214);

/// Accent (links, rules, highlighted type).
pub const ACCENT: Rgba = Rgba::rgb(255, 94, 42);

/// Accent hover/secondary.
pub const ACCENT_SOFT: Rgba = Rgba::rgb(255, 140, 100);

/// De-emphasized text (labels, captions, periods).
pub const MUTED: Rgba = Rgba::rgb(128, 124, 116);

/// Outlined display type (the hollow hero headlines).
pub const OUTLINE: Rgba = Rgba::rgb(70, 68, 64);
