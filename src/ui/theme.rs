use ratatui::style::Color;

pub const PRIMARY_BLUE: Color = Color::Rgb(0x1e, 0x88, 0xe5);
pub const DARK_BLUE: Color = Color::Rgb(0x0d, 0x2a, 0x5c);
pub const CHIP_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUS_BORDER: Color = Color::Rgb(0x1e, 0x88, 0xe5);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const RATING_STAR: Color = Color::Rgb(0xfa, 0xcc, 0x15);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
