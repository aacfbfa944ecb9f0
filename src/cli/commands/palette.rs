//! Artwork palette extraction.

use image::DynamicImage;
use tokio::runtime::Runtime;

use crate::error::ResultExt;
use crate::http;
use crate::palette::{ArtworkFetcher, Palette, SwatchRole, extract};

/// Print the six swatches of an image given by URL or path
pub fn cmd_palette(rt: &Runtime, source: &str) -> anyhow::Result<()> {
    let image = load_image(rt, source)?;
    let palette = extract(&image);
    print!("{}", render(&palette));
    Ok(())
}

fn load_image(rt: &Runtime, source: &str) -> crate::error::Result<DynamicImage> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let fetcher = ArtworkFetcher::new(http::build_client(http::DEFAULT_TIMEOUT)?);
        rt.block_on(fetcher.fetch(source))
            .with_context(format!("fetching {}", source))
    } else {
        image::open(source)
            .map_err(crate::palette::PaletteError::from)
            .with_context(format!("opening {}", source))
    }
}

fn render(palette: &Palette) -> String {
    let mut out = String::new();
    for role in SwatchRole::ALL {
        let line = match palette.get(role) {
            Some(swatch) => format!(
                "{:<13} {}  ({} px)\n",
                role.name(),
                swatch.hex(),
                swatch.population
            ),
            None => format!("{:<13} {}  (fallback)\n", role.name(), role.fallback_hex()),
        };
        out.push_str(&line);
    }
    out.push_str(&format!("Gradient      {}\n", palette.gradient().join(" -> ")));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Swatch;

    #[test]
    fn test_render_marks_fallbacks() {
        let mut palette = Palette::default();
        palette.set(
            SwatchRole::Vibrant,
            Swatch {
                rgb: [230, 40, 40],
                population: 812,
            },
        );

        let text = render(&palette);
        assert!(text.contains("Vibrant       #e62828  (812 px)"));
        assert!(text.contains("LightMuted    #e0e0e0  (fallback)"));
        assert!(text.contains("Gradient      #e62828 -> #23232b -> #18181b"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let rt = Runtime::new().unwrap();
        assert!(load_image(&rt, "/definitely/not/here.png").is_err());
    }
}
