//! Tailwind's default spacing, type and radius scales plus a palette subset.

use figcode_ir::Color;

const SPACING: &[(f64, &str)] = &[
    (0.0, "0"),
    (1.0, "px"),
    (2.0, "0.5"),
    (4.0, "1"),
    (6.0, "1.5"),
    (8.0, "2"),
    (10.0, "2.5"),
    (12.0, "3"),
    (14.0, "3.5"),
    (16.0, "4"),
    (20.0, "5"),
    (24.0, "6"),
    (28.0, "7"),
    (32.0, "8"),
    (36.0, "9"),
    (40.0, "10"),
    (44.0, "11"),
    (48.0, "12"),
    (56.0, "14"),
    (64.0, "16"),
    (80.0, "20"),
    (96.0, "24"),
    (112.0, "28"),
    (128.0, "32"),
    (144.0, "36"),
    (160.0, "40"),
    (176.0, "44"),
    (192.0, "48"),
    (208.0, "52"),
    (224.0, "56"),
    (240.0, "60"),
    (256.0, "64"),
    (288.0, "72"),
    (320.0, "80"),
    (384.0, "96"),
];

const FONT_SIZE: &[(f64, &str)] = &[
    (12.0, "xs"),
    (14.0, "sm"),
    (16.0, "base"),
    (18.0, "lg"),
    (20.0, "xl"),
    (24.0, "2xl"),
    (30.0, "3xl"),
    (36.0, "4xl"),
    (48.0, "5xl"),
    (60.0, "6xl"),
    (72.0, "7xl"),
    (96.0, "8xl"),
    (128.0, "9xl"),
];

// Empty name means the bare `rounded` class.
const RADIUS: &[(f64, &str)] = &[
    (2.0, "sm"),
    (4.0, ""),
    (6.0, "md"),
    (8.0, "lg"),
    (12.0, "xl"),
    (16.0, "2xl"),
    (24.0, "3xl"),
];

const PALETTE: &[(&str, u8, u8, u8)] = &[
    ("black", 0x00, 0x00, 0x00),
    ("white", 0xff, 0xff, 0xff),
    ("gray-100", 0xf3, 0xf4, 0xf6),
    ("gray-200", 0xe5, 0xe7, 0xeb),
    ("gray-300", 0xd1, 0xd5, 0xdb),
    ("gray-400", 0x9c, 0xa3, 0xaf),
    ("gray-500", 0x6b, 0x72, 0x80),
    ("gray-700", 0x37, 0x41, 0x51),
    ("gray-900", 0x11, 0x18, 0x27),
    ("red-500", 0xef, 0x44, 0x44),
    ("orange-500", 0xf9, 0x73, 0x16),
    ("amber-500", 0xf5, 0x9e, 0x0b),
    ("yellow-400", 0xfa, 0xcc, 0x15),
    ("green-500", 0x22, 0xc5, 0x5e),
    ("emerald-500", 0x10, 0xb9, 0x81),
    ("teal-500", 0x14, 0xb8, 0xa6),
    ("sky-500", 0x0e, 0xa5, 0xe9),
    ("blue-500", 0x3b, 0x82, 0xf6),
    ("indigo-500", 0x63, 0x66, 0xf1),
    ("violet-500", 0x8b, 0x5c, 0xf6),
    ("purple-500", 0xa8, 0x55, 0xf7),
    ("pink-500", 0xec, 0x48, 0x99),
    ("rose-500", 0xf4, 0x3f, 0x5e),
];

/// Relative distance a rounded value may move to reach a scale step.
const ROUNDING_TOLERANCE: f64 = 0.15;

/// Spacing step for `value` pixels, if one matches.
pub(crate) fn spacing(value: f64, round: bool) -> Option<&'static str> {
    lookup(SPACING, value, round)
}

pub(crate) fn font_size(value: f64, round: bool) -> Option<&'static str> {
    lookup(FONT_SIZE, value, round)
}

pub(crate) fn radius(value: f64, round: bool) -> Option<&'static str> {
    lookup(RADIUS, value, round)
}

/// Palette name for `color`, ignoring alpha.
///
/// Without `round` only exact matches count; with it the nearest palette
/// entry always wins.
pub(crate) fn color_name(color: &Color, round: bool) -> Option<&'static str> {
    let mut entries = PALETTE
        .iter()
        .map(|(name, r, g, b)| (*name, color.distance_sq(&Color::from_rgb8(*r, *g, *b))));
    if round {
        entries.min_by_key(|(_, distance)| *distance).map(|(name, _)| name)
    } else {
        entries.find(|(_, distance)| *distance == 0).map(|(name, _)| name)
    }
}

fn lookup(scale: &[(f64, &'static str)], value: f64, round: bool) -> Option<&'static str> {
    if let Some((_, name)) = scale.iter().find(|(px, _)| (px - value).abs() < 0.01) {
        return Some(*name);
    }
    if !round {
        return None;
    }
    let (px, name) = scale
        .iter()
        .min_by(|a, b| (a.0 - value).abs().total_cmp(&(b.0 - value).abs()))?;
    ((px - value).abs() <= value.abs() * ROUNDING_TOLERANCE).then_some(*name)
}
