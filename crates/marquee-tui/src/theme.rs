use ratatui::style::Color;

/// Colors used by the demo screen
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub grey0: Color,
    pub grey1: Color,

    // Marquee chips
    pub chip_bg: Color,
    pub chip_fg: Color,

    // Sliders
    pub track: Color,
    pub fill: Color,
    pub knob: Color,

    // Semantic colors
    pub accent: Color,
    pub overlay_bg: Color,
    pub overlay_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark base with a blue chip accent
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            grey0: Color::Rgb(0x7c, 0x6f, 0x64),
            grey1: Color::Rgb(0x92, 0x83, 0x74),
            chip_bg: Color::Rgb(0x0a, 0x84, 0xff),
            chip_fg: Color::White,
            track: Color::Rgb(0x50, 0x49, 0x45),
            fill: Color::Rgb(0x7d, 0xae, 0xa3),
            knob: Color::Rgb(0xdd, 0xc7, 0xa1),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            overlay_bg: Color::Black,
            overlay_fg: Color::White,
        }
    }
}
