use ratatui::style::Color;

/// Colors used by every widget for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub surface: Color,
    pub backdrop: Color,
    pub focus: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(0xfa, 0xfa, 0xfa),
    text: Color::Rgb(0x1f, 0x29, 0x37),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    border: Color::Rgb(0xd1, 0xd5, 0xdb),
    accent: Color::Rgb(0x25, 0x63, 0xeb),
    surface: Color::Rgb(0xff, 0xff, 0xff),
    backdrop: Color::Rgb(0x9c, 0xa3, 0xaf),
    focus: Color::Rgb(0xdb, 0xea, 0xfe),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(0x17, 0x17, 0x17),
    text: Color::Rgb(0xe5, 0xe5, 0xe5),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    border: Color::Rgb(0x40, 0x40, 0x40),
    accent: Color::Rgb(0xda, 0x77, 0x56),
    surface: Color::Rgb(0x26, 0x26, 0x26),
    backdrop: Color::Rgb(0x0a, 0x0a, 0x0a),
    focus: Color::Rgb(0x3f, 0x3f, 0x46),
};
