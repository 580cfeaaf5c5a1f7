use image::Rgb;
use ratatui::style::Color;

/// Colors used where a cell leaves its color unset.
///
/// The background is always opaque so the exported page never shows
/// through to whatever the PDF viewer paints behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb<u8>,
    pub foreground: Rgb<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            // slate-50
            background: Rgb([0xf8, 0xfa, 0xfc]),
            // slate-900
            foreground: Rgb([0x0f, 0x17, 0x2a]),
        }
    }
}

impl Palette {
    pub(crate) fn foreground_of(self, color: Color) -> Rgb<u8> {
        resolve(color, self.foreground)
    }

    pub(crate) fn background_of(self, color: Color) -> Rgb<u8> {
        resolve(color, self.background)
    }
}

/// Map a terminal color to RGB using the xterm defaults.
fn resolve(color: Color, reset: Rgb<u8>) -> Rgb<u8> {
    match color {
        Color::Reset => reset,
        Color::Rgb(r, g, b) => Rgb([r, g, b]),
        Color::Indexed(index) => indexed(index),
        Color::Black => Rgb([0, 0, 0]),
        Color::Red => Rgb([205, 0, 0]),
        Color::Green => Rgb([0, 205, 0]),
        Color::Yellow => Rgb([205, 205, 0]),
        Color::Blue => Rgb([0, 0, 238]),
        Color::Magenta => Rgb([205, 0, 205]),
        Color::Cyan => Rgb([0, 205, 205]),
        Color::Gray => Rgb([229, 229, 229]),
        Color::DarkGray => Rgb([127, 127, 127]),
        Color::LightRed => Rgb([255, 0, 0]),
        Color::LightGreen => Rgb([0, 255, 0]),
        Color::LightYellow => Rgb([255, 255, 0]),
        Color::LightBlue => Rgb([92, 92, 255]),
        Color::LightMagenta => Rgb([255, 0, 255]),
        Color::LightCyan => Rgb([0, 255, 255]),
        Color::White => Rgb([255, 255, 255]),
    }
}

const ANSI16: [[u8; 3]; 16] = [
    [0, 0, 0],
    [205, 0, 0],
    [0, 205, 0],
    [205, 205, 0],
    [0, 0, 238],
    [205, 0, 205],
    [0, 205, 205],
    [229, 229, 229],
    [127, 127, 127],
    [255, 0, 0],
    [0, 255, 0],
    [255, 255, 0],
    [92, 92, 255],
    [255, 0, 255],
    [0, 255, 255],
    [255, 255, 255],
];

fn indexed(index: u8) -> Rgb<u8> {
    match index {
        0..=15 => Rgb(ANSI16[usize::from(index)]),
        16..=231 => {
            let cube = index - 16;
            let level = |v: u8| if v == 0 { 0 } else { 55 + v * 40 };
            Rgb([level(cube / 36), level((cube / 6) % 6), level(cube % 6)])
        }
        232..=255 => {
            let gray = 8 + (index - 232) * 10;
            Rgb([gray, gray, gray])
        }
    }
}

/// Mix `fg` halfway towards `bg`.
pub(crate) fn dim(fg: Rgb<u8>, bg: Rgb<u8>) -> Rgb<u8> {
    let mix = |a: u8, b: u8| ((u16::from(a) + u16::from(b)) / 2) as u8;
    Rgb([mix(fg[0], bg[0]), mix(fg[1], bg[1]), mix(fg[2], bg[2])])
}
