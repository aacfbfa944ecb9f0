//! Artwork download and decoding.

use image::DynamicImage;

use super::{Palette, PaletteError, extract};

/// Downloads cover images and turns them into palettes
pub struct ArtworkFetcher {
    http_client: reqwest::Client,
}

impl ArtworkFetcher {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    /// Download and decode the image at `url`
    pub async fn fetch(&self, url: &str) -> Result<DynamicImage, PaletteError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| PaletteError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PaletteError::Http(response.status().as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| PaletteError::Network(e.to_string()))?;

        Ok(image::load_from_memory(&bytes)?)
    }

    /// Palette for a track's artwork.
    ///
    /// Never fails: no artwork, a failed download or an undecodable image all
    /// give the empty palette, whose roles resolve to the fallback colors.
    pub async fn palette_for(&self, artwork_url: Option<&str>) -> Palette {
        let Some(url) = artwork_url else {
            return Palette::default();
        };

        match self.fetch(url).await {
            Ok(image) => extract(&image),
            Err(e) => {
                tracing::warn!(url, error = %e, "Artwork unavailable, using fallback palette");
                Palette::default()
            }
        }
    }
}
