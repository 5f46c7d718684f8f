use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x61, 0xda, 0xfb);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const VALUE_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const BUTTON_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
