use colored::Color;

use invmap_common::inventory::Zone;

pub const PRIMARY: Color = Color::TrueColor { r: 95, g: 215, b: 135 };
pub const ACCENT: Color = Color::TrueColor { r: 215, g: 175, b: 95 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 208, g: 208, b: 208 };
pub const IPV4_ADDR: Color = Color::TrueColor { r: 135, g: 175, b: 255 };

pub fn zone(zone: Zone) -> Color {
    match zone {
        Zone::Nipr => Color::TrueColor { r: 255, g: 135, b: 95 },
        Zone::Dev => Color::TrueColor { r: 135, g: 215, b: 255 },
        Zone::Standalone => Color::TrueColor { r: 175, g: 255, b: 135 },
        Zone::OldStandalone => Color::BrightBlack,
        Zone::Unknown => Color::TrueColor { r: 215, g: 135, b: 215 },
    }
}
