// File: src/color_utils.rs
use crate::model::ShiftType;
use std::hash::{Hash, Hasher};

/// Avatar background for a staff member, stable for a given name.
/// Soft, light tones so the dark initial stays readable on top.
pub fn avatar_color(name: &str) -> (f32, f32, f32) {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    name.hash(&mut hasher);
    let hash = hasher.finish();

    let h = (hash % 360) as f32;
    // Saturation 35%-75%, lightness 60%-80%, drawn from other bits than the hue.
    let s = 0.35 + (((hash >> 16) % 41) as f32 / 100.0);
    let l = 0.60 + (((hash >> 32) % 21) as f32 / 100.0);

    hsl_to_rgb(h, s, l)
}

/// Upper-cased first letter of the name, '?' for an empty one.
pub fn initials(name: &str) -> String {
    name.chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

/// Fill color of a grid cell by shift type. `None` (empty cell) is the
/// green "free slot" tone.
pub fn shift_color(shift: Option<ShiftType>) -> (f32, f32, f32) {
    let hue = match shift {
        None => return hsl_to_rgb(140.0, 0.45, 0.45),
        Some(ShiftType::NoShift) => return (0.55, 0.55, 0.55),
        Some(ShiftType::EarlyShift) => 45.0,
        Some(ShiftType::MiddleShift) => 200.0,
        Some(ShiftType::LateShift) => 265.0,
        Some(ShiftType::CustomShift) => 320.0,
        Some(ShiftType::Vacation) => 10.0,
    };
    hsl_to_rgb(hue, 0.60, 0.70)
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h as u32 / 60 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (r + m, g + m, b + m)
}

/// Whether white text reads better than black on this background.
pub fn is_dark(r: f32, g: f32, b: f32) -> bool {
    0.299 * r + 0.587 * g + 0.114 * b < 0.5
}

/// 0.0-1.0 channels to 8-bit.
pub fn to_rgb8((r, g, b): (f32, f32, f32)) -> (u8, u8, u8) {
    let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    (q(r), q(g), q(b))
}
