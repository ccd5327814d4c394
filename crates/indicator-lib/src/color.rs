//! Named LED colors and their peak wavelengths.
//!
//! Wavelengths are stored in meters. Lookups are exact and case-sensitive.

/// Color used when an indicator is built without a wavelength.
pub const DEFAULT_COLOR: &str = "blue";

/// Wavelength of [`DEFAULT_COLOR`] in meters.
pub const DEFAULT_WAVELENGTH: f64 = 470e-9;

/// Color name → peak wavelength in meters.
pub static COLOR_TABLE: [(&str, f64); 7] = [
    ("red", 650e-9),
    ("orange", 610e-9),
    ("yellow", 580e-9),
    ("green", 530e-9),
    ("blue", 470e-9),
    ("indigo", 435e-9),
    ("violet", 400e-9),
];

/// Look up the wavelength of a named color.
pub fn wavelength_of(name: &str) -> Option<f64> {
    COLOR_TABLE
        .iter()
        .find(|(color, _)| *color == name)
        .map(|&(_, wavelength)| wavelength)
}

/// All recognized color names, in table order.
pub fn color_names() -> Vec<&'static str> {
    COLOR_TABLE.iter().map(|&(name, _)| name).collect()
}

/// Resolve a color name, or fail with the list of valid names.
pub fn resolve(name: &str) -> crate::error::Result<f64> {
    wavelength_of(name).ok_or_else(|| crate::IndicatorError::UnknownColor {
        value: name.to_string(),
        valid: color_names(),
    })
}
