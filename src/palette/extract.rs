//! Swatch extraction: bucket the pixels, then let each role pick its best bucket.

use std::collections::HashMap;

use image::DynamicImage;

use super::{Palette, Swatch, SwatchRole};

/// Longest side sampled; larger artwork is downscaled first
const MAX_SAMPLE_DIM: u32 = 64;

const WEIGHT_SATURATION: f32 = 3.0;
const WEIGHT_LUMA: f32 = 6.0;
const WEIGHT_POPULATION: f32 = 1.0;

/// Lightness and saturation window a role accepts, plus what it aims for
struct RoleTarget {
    min_luma: f32,
    max_luma: f32,
    target_luma: f32,
    min_saturation: f32,
    max_saturation: f32,
    target_saturation: f32,
}

fn target(role: SwatchRole) -> RoleTarget {
    let (min_luma, max_luma, target_luma) = match role {
        SwatchRole::Vibrant | SwatchRole::Muted => (0.3, 0.7, 0.5),
        SwatchRole::LightVibrant | SwatchRole::LightMuted => (0.55, 1.0, 0.74),
        SwatchRole::DarkVibrant | SwatchRole::DarkMuted => (0.0, 0.45, 0.26),
    };
    let (min_saturation, max_saturation, target_saturation) = match role {
        SwatchRole::Vibrant | SwatchRole::LightVibrant | SwatchRole::DarkVibrant => (0.35, 1.0, 1.0),
        SwatchRole::Muted | SwatchRole::LightMuted | SwatchRole::DarkMuted => (0.0, 0.4, 0.3),
    };
    RoleTarget {
        min_luma,
        max_luma,
        target_luma,
        min_saturation,
        max_saturation,
        target_saturation,
    }
}

/// Extract the palette from decoded artwork.
pub fn extract(image: &DynamicImage) -> Palette {
    let candidates = quantize(image);
    let max_population = candidates.iter().map(|s| s.population).max().unwrap_or(0);

    let mut palette = Palette::default();
    let mut used = vec![false; candidates.len()];

    for role in SwatchRole::ALL {
        let goal = target(role);
        let best = candidates
            .iter()
            .enumerate()
            .filter(|(i, _)| !used[*i])
            .filter_map(|(i, swatch)| {
                let (_, s, l) = swatch.hsl();
                let fits = (goal.min_luma..=goal.max_luma).contains(&l)
                    && (goal.min_saturation..=goal.max_saturation).contains(&s);
                fits.then(|| (i, score(&goal, s, l, swatch.population, max_population)))
            })
            .max_by(|a, b| a.1.total_cmp(&b.1));

        if let Some((i, _)) = best {
            used[i] = true;
            palette.set(role, candidates[i]);
        }
    }

    palette
}

fn score(goal: &RoleTarget, saturation: f32, luma: f32, population: u32, max_population: u32) -> f32 {
    let population_share = if max_population == 0 {
        0.0
    } else {
        population as f32 / max_population as f32
    };
    WEIGHT_SATURATION * (1.0 - (saturation - goal.target_saturation).abs())
        + WEIGHT_LUMA * (1.0 - (luma - goal.target_luma).abs())
        + WEIGHT_POPULATION * population_share
}

/// Group opaque pixels into 5-bit-per-channel buckets and average each bucket.
///
/// Near-white and near-black pixels are ignored; they say nothing about the
/// artwork's character.
fn quantize(image: &DynamicImage) -> Vec<Swatch> {
    let rgba = if image.width() > MAX_SAMPLE_DIM || image.height() > MAX_SAMPLE_DIM {
        image.thumbnail(MAX_SAMPLE_DIM, MAX_SAMPLE_DIM).to_rgba8()
    } else {
        image.to_rgba8()
    };

    let mut buckets: HashMap<(u8, u8, u8), ([u64; 3], u32)> = HashMap::new();
    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        if a < 125 || is_near_white(r, g, b) || is_near_black(r, g, b) {
            continue;
        }
        let entry = buckets.entry((r >> 3, g >> 3, b >> 3)).or_default();
        entry.0[0] += r as u64;
        entry.0[1] += g as u64;
        entry.0[2] += b as u64;
        entry.1 += 1;
    }

    let mut swatches: Vec<Swatch> = buckets
        .into_values()
        .map(|(sum, count)| Swatch {
            rgb: sum.map(|c| (c / count as u64) as u8),
            population: count,
        })
        .collect();
    // Stable order so ties resolve the same way every run
    swatches.sort_by(|a, b| b.population.cmp(&a.population).then(a.rgb.cmp(&b.rgb)));
    swatches
}

fn is_near_white(r: u8, g: u8, b: u8) -> bool {
    r > 250 && g > 250 && b > 250
}

fn is_near_black(r: u8, g: u8, b: u8) -> bool {
    r < 5 && g < 5 && b < 5
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn quadrants(colors: [[u8; 3]; 4]) -> DynamicImage {
        let img = RgbaImage::from_fn(64, 64, |x, y| {
            let q = (if x < 32 { 0 } else { 1 }) + (if y < 32 { 0 } else { 2 });
            let [r, g, b] = colors[q];
            Rgba([r, g, b, 255])
        });
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn test_solid_red_is_vibrant_only() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255])));
        let palette = extract(&img);
        assert_eq!(palette.hex_or_default(SwatchRole::Vibrant), "#ff0000");
        assert!(palette.get(SwatchRole::Muted).is_none());
        assert!(palette.get(SwatchRole::LightVibrant).is_none());
        assert_eq!(palette.get(SwatchRole::Vibrant).unwrap().population, 100);
    }

    #[test]
    fn test_roles_classified() {
        let palette = extract(&quadrants([
            [255, 0, 0],     // vibrant
            [128, 0, 0],     // dark vibrant
            [255, 128, 128], // light vibrant
            [110, 120, 140], // muted
        ]));

        assert_eq!(palette.hex_or_default(SwatchRole::Vibrant), "#ff0000");
        assert_eq!(palette.hex_or_default(SwatchRole::DarkVibrant), "#800000");
        assert_eq!(palette.hex_or_default(SwatchRole::LightVibrant), "#ff8080");
        assert_eq!(palette.hex_or_default(SwatchRole::Muted), "#6e788c");
        assert!(palette.get(SwatchRole::LightMuted).is_none());
        assert!(palette.get(SwatchRole::DarkMuted).is_none());
    }

    #[test]
    fn test_white_black_and_transparent_are_ignored() {
        let img = RgbaImage::from_fn(4, 1, |x, _| match x {
            0 => Rgba([255, 255, 255, 255]),
            1 => Rgba([0, 0, 0, 255]),
            2 => Rgba([255, 0, 0, 0]),
            _ => Rgba([255, 255, 254, 255]),
        });
        assert!(extract(&DynamicImage::ImageRgba8(img)).is_empty());
    }

    #[test]
    fn test_large_artwork_is_downscaled() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(640, 640, Rgba([30, 200, 90, 255])));
        let candidates = quantize(&img);
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].population <= MAX_SAMPLE_DIM * MAX_SAMPLE_DIM);
    }

    #[test]
    fn test_a_color_fills_one_role_only() {
        // Gray-blue fits both Muted and DarkMuted; Muted picks first
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([90, 100, 120, 255])));
        let palette = extract(&img);
        assert!(palette.get(SwatchRole::Muted).is_some());
        assert!(palette.get(SwatchRole::DarkMuted).is_none());
    }
}
