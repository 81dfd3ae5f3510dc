use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: industry name → Color32
// ---------------------------------------------------------------------------

/// One stable colour per industry, assigned over the sorted names so the
/// mapping does not depend on the current scope.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new(industries: &[String]) -> Self {
        let palette = generate_palette(industries.len());
        let mapping: BTreeMap<String, Color32> =
            industries.iter().cloned().zip(palette).collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for an industry.  Unknown names fall back to gray.
    pub fn color_for(&self, industry: &str) -> Color32 {
        self.mapping
            .get(industry)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_distinct() {
        let palette = generate_palette(35);
        assert_eq!(palette.len(), 35);
        for i in 0..palette.len() {
            for j in (i + 1)..palette.len() {
                assert_ne!(palette[i], palette[j], "colours {i} and {j} collide");
            }
        }
    }

    #[test]
    fn color_map_is_stable_and_falls_back() {
        let names = vec!["Auto".to_string(), "Tobacco".to_string()];
        let map = ColorMap::new(&names);
        assert_eq!(map.color_for("Auto"), map.color_for("Auto"));
        assert_eq!(map.color_for("Basket Weaving"), Color32::GRAY);
    }
}
