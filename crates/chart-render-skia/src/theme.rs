// File: crates/chart-render-skia/src/theme.rs
// Summary: Named palettes for chart chrome (background, grid, axes, labels). Series keep their own colors.

use chart_core::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub grid_minor: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub placeholder: Rgba,
    /// Ring around each marker; matches the background so markers read as cut out of the line.
    pub marker_outline: Rgba,
}

/// Same palette the SVG writer uses.
pub const LIGHT: Theme = Theme {
    name: "light",
    background: Rgba::WHITE,
    grid: Rgba::rgb(0xf3, 0xf4, 0xf6),
    grid_minor: Rgba::rgb(0xf9, 0xfa, 0xfb),
    axis_line: Rgba::rgb(0x6b, 0x72, 0x80),
    axis_label: Rgba::rgb(0x4b, 0x55, 0x63),
    placeholder: Rgba::rgb(0x6b, 0x72, 0x80),
    marker_outline: Rgba::WHITE,
};

pub const DARK: Theme = Theme {
    name: "dark",
    background: Rgba::rgb(18, 18, 20),
    grid: Rgba::rgb(40, 40, 45),
    grid_minor: Rgba::rgb(30, 30, 34),
    axis_line: Rgba::rgb(180, 180, 190),
    axis_label: Rgba::rgb(210, 210, 220),
    placeholder: Rgba::rgb(150, 150, 160),
    marker_outline: Rgba::rgb(18, 18, 20),
};

pub const SOLARIZED_DARK: Theme = Theme {
    name: "solarized-dark",
    background: Rgba::rgb(0x00, 0x2b, 0x36),
    grid: Rgba::rgb(0x07, 0x36, 0x42),
    grid_minor: Rgba::rgb(0x04, 0x31, 0x3c),
    axis_line: Rgba::rgb(0x93, 0xa1, 0xa1),
    axis_label: Rgba::rgb(0xee, 0xe8, 0xd5),
    placeholder: Rgba::rgb(0x83, 0x94, 0x96),
    marker_outline: Rgba::rgb(0x00, 0x2b, 0x36),
};

pub const SOLARIZED_LIGHT: Theme = Theme {
    name: "solarized-light",
    background: Rgba::rgb(0xfd, 0xf6, 0xe3),
    grid: Rgba::rgb(0xee, 0xe8, 0xd5),
    grid_minor: Rgba::rgb(0xf5, 0xef, 0xdc),
    axis_line: Rgba::rgb(0x65, 0x7b, 0x83),
    axis_label: Rgba::rgb(0x07, 0x36, 0x42),
    placeholder: Rgba::rgb(0x58, 0x6e, 0x75),
    marker_outline: Rgba::rgb(0xfd, 0xf6, 0xe3),
};

pub const HIGH_CONTRAST_DARK: Theme = Theme {
    name: "high-contrast-dark",
    background: Rgba::rgb(0, 0, 0),
    grid: Rgba::rgb(0x33, 0x33, 0x33),
    grid_minor: Rgba::rgb(0x1a, 0x1a, 0x1a),
    axis_line: Rgba::WHITE,
    axis_label: Rgba::WHITE,
    placeholder: Rgba::rgb(0xcc, 0xcc, 0xcc),
    marker_outline: Rgba::rgb(0, 0, 0),
};

impl Default for Theme {
    fn default() -> Self { LIGHT }
}

pub fn presets() -> [Theme; 5] {
    [LIGHT, DARK, SOLARIZED_DARK, SOLARIZED_LIGHT, HIGH_CONTRAST_DARK]
}

/// Case-insensitive lookup by name.
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
