use std::fmt::Display;

use eframe::egui::Color32;

/// A color in HSL space, the way the swarm is styled.
///
/// `hue` is in degrees and wraps modulo 360, `saturation` and `lightness` are
/// percentages in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub const BLACK: Hsl = Hsl::new(0.0, 0.0, 0.0);

    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Fully saturated color at the given hue and lightness.
    pub const fn saturated(hue: f64, lightness: f64) -> Self {
        Self::new(hue, 100.0, lightness)
    }

    /// Hue normalized into [0, 360).
    pub fn wrapped_hue(&self) -> f64 {
        let hue = self.hue.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        if hue >= 360.0 { 0.0 } else { hue }
    }

    /// Convert to RGB components in [0, 1].
    pub fn to_rgb(&self) -> [f64; 3] {
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h = self.wrapped_hue() / 60.0;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        [r + m, g + m, b + m]
    }

    /// Convert to an egui color, applying `alpha` in [0, 1].
    pub fn to_color32(&self, alpha: f64) -> Color32 {
        let [r, g, b] = self.to_rgb().map(|c| (c * 255.0).round() as u8);
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}

/// CSS notation, e.g. `hsl(120, 100%, 50%)`.
impl Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}
