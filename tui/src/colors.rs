use ratatui::style::Color;

pub(crate) const WHITE: Color = Color::Rgb(0xff, 0xff, 0xff);
pub(crate) const INDIGO: Color = Color::Rgb(0x4f, 0x46, 0xe5);
pub(crate) const EMERALD: Color = Color::Rgb(0x10, 0xb9, 0x81);
pub(crate) const SLATE_900: Color = Color::Rgb(0x0f, 0x17, 0x2a);
pub(crate) const SLATE_500: Color = Color::Rgb(0x64, 0x74, 0x8b);
pub(crate) const SLATE_400: Color = Color::Rgb(0x94, 0xa3, 0xb8);
pub(crate) const SLATE_200: Color = Color::Rgb(0xe2, 0xe8, 0xf0);
pub(crate) const SLATE_100: Color = Color::Rgb(0xf1, 0xf5, 0xf9);
