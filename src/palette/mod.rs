//! Artwork color palette.
//!
//! Pulls six representative swatches out of an album cover so the visuals can
//! be tinted to match the track:
//! - **Vibrant / LightVibrant / DarkVibrant** - saturated colors at three lightness levels
//! - **Muted / LightMuted / DarkMuted** - desaturated counterparts
//!
//! Roles that the artwork can't fill fall back to fixed neutral colors, so
//! callers always get a usable hex value.

mod extract;
mod fetch;

pub use extract::extract;
pub use fetch::ArtworkFetcher;

use serde::Serialize;

/// The part a swatch plays in the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SwatchRole {
    Vibrant,
    LightVibrant,
    DarkVibrant,
    Muted,
    LightMuted,
    DarkMuted,
}

impl SwatchRole {
    /// Order in which roles claim colors; earlier roles get first pick
    pub const ALL: [SwatchRole; 6] = [
        SwatchRole::Vibrant,
        SwatchRole::LightVibrant,
        SwatchRole::DarkVibrant,
        SwatchRole::Muted,
        SwatchRole::LightMuted,
        SwatchRole::DarkMuted,
    ];

    /// Color used when the artwork has nothing for this role
    pub fn fallback_hex(self) -> &'static str {
        match self {
            SwatchRole::Vibrant => "#18181b",
            SwatchRole::Muted => "#23232b",
            SwatchRole::DarkVibrant => "#18181b",
            SwatchRole::LightVibrant => "#ffffff",
            SwatchRole::LightMuted => "#e0e0e0",
            SwatchRole::DarkMuted => "#18181b",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SwatchRole::Vibrant => "Vibrant",
            SwatchRole::LightVibrant => "LightVibrant",
            SwatchRole::DarkVibrant => "DarkVibrant",
            SwatchRole::Muted => "Muted",
            SwatchRole::LightMuted => "LightMuted",
            SwatchRole::DarkMuted => "DarkMuted",
        }
    }

    fn index(self) -> usize {
        match self {
            SwatchRole::Vibrant => 0,
            SwatchRole::LightVibrant => 1,
            SwatchRole::DarkVibrant => 2,
            SwatchRole::Muted => 3,
            SwatchRole::LightMuted => 4,
            SwatchRole::DarkMuted => 5,
        }
    }
}

/// A representative color and how many sampled pixels it stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub rgb: [u8; 3],
    pub population: u32,
}

impl Swatch {
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.rgb[0], self.rgb[1], self.rgb[2])
    }

    /// Hue in degrees, saturation and lightness in 0..=1
    pub fn hsl(&self) -> (f32, f32, f32) {
        rgb_to_hsl(self.rgb)
    }
}

/// Swatches by role; any of them may be missing
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Palette {
    swatches: [Option<Swatch>; 6],
}

impl Palette {
    pub fn get(&self, role: SwatchRole) -> Option<&Swatch> {
        self.swatches[role.index()].as_ref()
    }

    pub fn set(&mut self, role: SwatchRole, swatch: Swatch) {
        self.swatches[role.index()] = Some(swatch);
    }

    pub fn hex_or_default(&self, role: SwatchRole) -> String {
        self.get(role)
            .map(Swatch::hex)
            .unwrap_or_else(|| role.fallback_hex().to_string())
    }

    /// The three colors the background gradient is drawn with
    pub fn gradient(&self) -> [String; 3] {
        [
            self.hex_or_default(SwatchRole::Vibrant),
            self.hex_or_default(SwatchRole::Muted),
            self.hex_or_default(SwatchRole::DarkVibrant),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.iter().all(Option::is_none)
    }
}

pub(crate) fn rgb_to_hsl(rgb: [u8; 3]) -> (f32, f32, f32) {
    let [r, g, b] = rgb.map(|c| c as f32 / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;

    if d == 0.0 {
        return (0.0, 0.0, l);
    }

    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
    let h = if max == r {
        ((g - b) / d).rem_euclid(6.0)
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h * 60.0, s, l)
}

/// Errors from artwork download and decoding
#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {0} fetching artwork")]
    Http(u16),

    #[error("Failed to decode artwork: {0}")]
    Decode(#[from] image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_palette_uses_fallbacks() {
        let palette = Palette::default();
        assert!(palette.is_empty());
        assert_eq!(palette.hex_or_default(SwatchRole::Vibrant), "#18181b");
        assert_eq!(palette.hex_or_default(SwatchRole::Muted), "#23232b");
        assert_eq!(palette.hex_or_default(SwatchRole::LightVibrant), "#ffffff");
        assert_eq!(palette.hex_or_default(SwatchRole::LightMuted), "#e0e0e0");
        assert_eq!(
            palette.gradient(),
            ["#18181b".to_string(), "#23232b".to_string(), "#18181b".to_string()]
        );
    }

    #[test]
    fn test_swatch_hex() {
        let swatch = Swatch {
            rgb: [255, 8, 171],
            population: 1,
        };
        assert_eq!(swatch.hex(), "#ff08ab");
    }

    #[test]
    fn test_hsl_conversion() {
        let (h, s, l) = rgb_to_hsl([255, 0, 0]);
        assert_eq!((h, s, l), (0.0, 1.0, 0.5));

        let (_, s, l) = rgb_to_hsl([128, 128, 128]);
        assert_eq!(s, 0.0);
        assert!((l - 0.502).abs() < 0.001);

        let (h, _, _) = rgb_to_hsl([0, 0, 255]);
        assert_eq!(h, 240.0);
    }

    #[test]
    fn test_set_and_get() {
        let mut palette = Palette::default();
        palette.set(
            SwatchRole::Muted,
            Swatch {
                rgb: [1, 2, 3],
                population: 9,
            },
        );
        assert_eq!(palette.hex_or_default(SwatchRole::Muted), "#010203");
        assert!(palette.get(SwatchRole::Vibrant).is_none());
    }
}
