//! Conversions from the style model's document units (millimeters and
//! points) to the OOXML units the DOCX backend writes.

/// Twips per millimeter: 1 inch = 25.4 mm = 1440 twips.
const TWIPS_PER_MM: f64 = 1440.0 / 25.4;

/// Convert millimeters to twips (1/20 pt), the page geometry unit.
pub fn mm_to_twip(mm: f64) -> i32 {
    (mm * TWIPS_PER_MM).round() as i32
}

/// Convert points to twips (1/20 pt).
pub fn pt_to_twip(pt: f64) -> i32 {
    (pt * 20.0).round() as i32
}

/// Convert points to half-points, the OOXML font size unit.
pub fn pt_to_half_points(pt: f64) -> usize {
    (pt * 2.0).round().max(0.0) as usize
}

/// Convert a line-spacing multiplier to 240ths of a line.
pub fn spacing_to_line_units(multiplier: f64) -> i32 {
    (multiplier * 240.0).round() as i32
}
