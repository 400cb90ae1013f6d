//! Core types shared across the crate.
//!
//! Colors, cells, rectangles and the margin model used by the visibility
//! observer. Everything here is plain data: cheap to copy, no reactivity.

use bitflags::bitflags;

/// Nominal px-per-cell ratio.
///
/// Style math stays in px (distances, margins, percent offsets); the
/// compositor and observer convert to cells at this ratio.
pub const CELL_PX: f32 = 10.0;

// =============================================================================
// COLOR
// =============================================================================

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Sentinel for "use the terminal's default color".
    pub const TERMINAL_DEFAULT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn is_terminal_default(&self) -> bool {
        self.a == 0
    }

    /// Linear interpolation between two colors. `t` is clamped to [0, 1].
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| -> u8 { (a as f32 + (b as f32 - a as f32) * t).round() as u8 };
        Self {
            r: ch(self.r, other.r),
            g: ch(self.g, other.g),
            b: ch(self.b, other.b),
            a: ch(self.a, other.a),
        }
    }

    /// Fade this color toward a backdrop. `opacity` 0.0 = backdrop, 1.0 = self.
    pub fn faded(self, backdrop: Self, opacity: f32) -> Self {
        backdrop.lerp(self, opacity)
    }
}

// =============================================================================
// TEXT ATTRIBUTES
// =============================================================================

bitflags! {
    /// Cell text attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const BOLD      = 0b0000_0001;
        const ITALIC    = 0b0000_0010;
        const UNDERLINE = 0b0000_0100;
        const DIM       = 0b0000_1000;
    }
}

// =============================================================================
// CELL
// =============================================================================

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgba,
    pub bg: Rgba,
    pub attrs: Attr,
}

impl Cell {
    pub const fn blank(bg: Rgba) -> Self {
        Self {
            ch: ' ',
            fg: Rgba::TERMINAL_DEFAULT,
            bg,
            attrs: Attr::empty(),
        }
    }
}

// =============================================================================
// GEOMETRY
// =============================================================================

/// Integer cell rectangle. `x`/`y` are in content space and may go negative
/// once a scroll offset or transform is applied, so they are signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Intersection of two rects. Empty intersections collapse to a
    /// zero-sized rect at the clamped origin.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect {
            x,
            y,
            width: (right - x).max(0) as u16,
            height: (bottom - y).max(0) as u16,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

// =============================================================================
// ROOT MARGIN
// =============================================================================

/// Signed per-edge adjustment applied to the observation root, in px.
///
/// Positive values grow the root box outward, negative values shrink it --
/// the same convention as a CSS `rootMargin`. Used only for intersection
/// computation, never for layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: i16,
    pub right: i16,
    pub bottom: i16,
    pub left: i16,
}

impl Edges {
    pub const fn new(top: i16, right: i16, bottom: i16, left: i16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Margin on the bottom edge only. Negative values delay the trigger
    /// until the element is further into the viewport.
    pub const fn bottom_px(px: i16) -> Self {
        Self {
            top: 0,
            right: 0,
            bottom: px,
            left: 0,
        }
    }

    /// Apply the margins to a root rect, converting px to cells.
    ///
    /// The result may be smaller (negative margins) or larger than the
    /// input. Collapses to zero size rather than inverting.
    pub fn apply(&self, root: Rect, cell_px: f32) -> Rect {
        let cells = |px: i16| -> i32 { (px as f32 / cell_px).round() as i32 };
        let x = root.x - cells(self.left);
        let y = root.y - cells(self.top);
        let right = root.right() + cells(self.right);
        let bottom = root.bottom() + cells(self.bottom);
        Rect {
            x,
            y,
            width: (right - x).max(0) as u16,
            height: (bottom - y).max(0) as u16,
        }
    }
}

// =============================================================================
// TEXT LAYOUT
// =============================================================================

/// Horizontal text alignment within an element's width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Text wrapping behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextWrap {
    #[default]
    Wrap,
    NoWrap,
}

// =============================================================================
// TESTS
// =============================================================================
