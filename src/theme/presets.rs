//! Ready-made palettes selectable as one-shot overrides.

use crate::color::HexColor;
use crate::theme::Palette;
use once_cell::sync::Lazy;

const BLUE: Palette = Palette {
    primary: HexColor::rgb(0x25, 0x63, 0xeb),        // #2563eb
    secondary: HexColor::rgb(0x1d, 0x4e, 0xd8),      // #1d4ed8
    accent: HexColor::rgb(0x3b, 0x82, 0xf6),         // #3b82f6
    background: HexColor::rgb(0xef, 0xf6, 0xff),     // #eff6ff
    surface: HexColor::rgb(0xff, 0xff, 0xff),        // #ffffff
    text: HexColor::rgb(0x1e, 0x3a, 0x8a),           // #1e3a8a
    text_secondary: HexColor::rgb(0x60, 0xa5, 0xfa), // #60a5fa
    border: HexColor::rgb(0xbf, 0xdb, 0xfe),         // #bfdbfe
    success: HexColor::rgb(0x10, 0xb9, 0x81),        // #10b981
    warning: HexColor::rgb(0xf5, 0x9e, 0x0b),        // #f59e0b
    error: HexColor::rgb(0xef, 0x44, 0x44),          // #ef4444
    info: HexColor::rgb(0x25, 0x63, 0xeb),           // #2563eb
};

const PURPLE: Palette = Palette {
    primary: HexColor::rgb(0x93, 0x33, 0xea),        // #9333ea
    secondary: HexColor::rgb(0x7e, 0x22, 0xce),      // #7e22ce
    accent: HexColor::rgb(0xa8, 0x55, 0xf7),         // #a855f7
    background: HexColor::rgb(0xfa, 0xf5, 0xff),     // #faf5ff
    surface: HexColor::rgb(0xff, 0xff, 0xff),        // #ffffff
    text: HexColor::rgb(0x58, 0x1c, 0x87),           // #581c87
    text_secondary: HexColor::rgb(0xc0, 0x84, 0xfc), // #c084fc
    border: HexColor::rgb(0xe9, 0xd5, 0xff),         // #e9d5ff
    success: HexColor::rgb(0x10, 0xb9, 0x81),        // #10b981
    warning: HexColor::rgb(0xf5, 0x9e, 0x0b),        // #f59e0b
    error: HexColor::rgb(0xef, 0x44, 0x44),          // #ef4444
    info: HexColor::rgb(0x93, 0x33, 0xea),           // #9333ea
};

const GREEN: Palette = Palette {
    primary: HexColor::rgb(0x16, 0xa3, 0x4a),        // #16a34a
    secondary: HexColor::rgb(0x15, 0x80, 0x3d),      // #15803d
    accent: HexColor::rgb(0x22, 0xc5, 0x5e),         // #22c55e
    background: HexColor::rgb(0xf0, 0xfd, 0xf4),     // #f0fdf4
    surface: HexColor::rgb(0xff, 0xff, 0xff),        // #ffffff
    text: HexColor::rgb(0x14, 0x53, 0x2d),           // #14532d
    text_secondary: HexColor::rgb(0x4a, 0xde, 0x80), // #4ade80
    border: HexColor::rgb(0xbb, 0xf7, 0xd0),         // #bbf7d0
    success: HexColor::rgb(0x16, 0xa3, 0x4a),        // #16a34a
    warning: HexColor::rgb(0xf5, 0x9e, 0x0b),        // #f59e0b
    error: HexColor::rgb(0xef, 0x44, 0x44),          // #ef4444
    info: HexColor::rgb(0x16, 0xa3, 0x4a),           // #16a34a
};

static CATALOG: Lazy<Vec<(&'static str, Palette)>> = Lazy::new(|| {
    vec![
        ("Light", Palette::LIGHT),
        ("Dark", Palette::DARK),
        ("Blue Theme", BLUE),
        ("Purple Theme", PURPLE),
        ("Green Theme", GREEN),
    ]
});

/// The full catalog in display order.
pub fn presets() -> &'static [(&'static str, Palette)] {
    &CATALOG
}

pub fn preset(name: &str) -> Option<Palette> {
    CATALOG
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, palette)| *palette)
}
