//! Theme: dark and light palettes, shared layout metrics.

use ratatui::style::Color;

#[derive(Clone, Copy, Debug)]
pub struct Palette {
    /// Main canvas.
    pub bg: Color,
    /// Sheet body, palette overlay, status bar.
    pub elevated: Color,
    /// Borders / separators.
    pub border: Color,
    /// Primary accent (greeting, current role, You label).
    pub accent: Color,
    /// Assistant label, links.
    pub accent_soft: Color,
    /// Body text.
    pub text: Color,
    /// Secondary text.
    pub text_dim: Color,
    /// Hints.
    pub muted: Color,
    /// Under-development warning in the palette.
    pub warning: Color,
    /// Canvas base for backdrop mixing.
    pub backdrop_base: (u8, u8, u8),
}

/// Dark: near-black canvas, blue accents.
pub const DARK: Palette = Palette {
    bg: Color::Rgb(0x18, 0x1c, 0x22),
    elevated: Color::Rgb(0x16, 0x1a, 0x1f),
    border: Color::Rgb(0x2d, 0x34, 0x3e),
    accent: Color::Rgb(0x6b, 0xbc, 0xff),
    accent_soft: Color::Rgb(0x99, 0xd4, 0xff),
    text: Color::Rgb(0xf2, 0xf4, 0xf8),
    text_dim: Color::Rgb(0xbc, 0xc5, 0xd0),
    muted: Color::Rgb(0x94, 0x9e, 0xad),
    warning: Color::Rgb(0xf5, 0xc5, 0x4b),
    backdrop_base: (0x18, 0x1c, 0x22),
};

/// Light: warm white canvas, orange accents.
pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(0xfa, 0xfa, 0xf7),
    elevated: Color::Rgb(0xf1, 0xf1, 0xed),
    border: Color::Rgb(0xd6, 0xd6, 0xd0),
    accent: Color::Rgb(0xf9, 0x73, 0x16),
    accent_soft: Color::Rgb(0xfb, 0x92, 0x3c),
    text: Color::Rgb(0x1f, 0x29, 0x37),
    text_dim: Color::Rgb(0x4b, 0x55, 0x63),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    warning: Color::Rgb(0xb4, 0x83, 0x0b),
    backdrop_base: (0xfa, 0xfa, 0xf7),
};

pub fn palette(dark_mode: bool) -> &'static Palette {
    if dark_mode {
        &DARK
    } else {
        &LIGHT
    }
}

/// Darken the canvas behind the sheet in proportion to its openness.
pub fn backdrop_color(palette: &Palette, opacity: f32) -> Color {
    let (r, g, b) = palette.backdrop_base;
    let mix = |c: u8| (f32::from(c) * (1.0 - 0.7 * opacity.clamp(0.0, 1.0))) as u8;
    Color::Rgb(mix(r), mix(g), mix(b))
}

pub const HEADER_HEIGHT: u16 = 4;
pub const STATUS_HEIGHT: u16 = 1;
/// Inner horizontal margin (chars each side).
pub const MARGIN_X: u16 = 2;
/// Below this width the narrow layout (with the projects sheet) is used.
pub const NARROW_WIDTH: u16 = 72;
pub const PALETTE_MAX_WIDTH: u16 = 64;
pub const PALETTE_MAX_HEIGHT: u16 = 18;
pub const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
/// Ticks between greeting changes (~1.5 s at the 80 ms tick rate).
pub const GREETING_TICKS: usize = 18;
