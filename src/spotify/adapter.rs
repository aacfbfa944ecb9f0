//! Adapter layer: Convert Spotify DTOs to the now-playing domain type

use serde::Serialize;

use super::dto;

/// The track currently playing on the user's account
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NowPlaying {
    /// Spotify id, or the URI for local files that have no id
    pub track_id: String,
    pub title: String,
    /// All credited artists, primary first
    pub artists: Vec<String>,
    /// Largest artwork (Spotify lists it first)
    pub artwork_url: Option<String>,
    pub is_playing: bool,
}

impl NowPlaying {
    /// The artist the tempo lookup is keyed on
    pub fn primary_artist(&self) -> Option<&str> {
        self.artists.first().map(String::as_str)
    }

    pub fn artists_display(&self) -> String {
        self.artists.join(", ")
    }
}

/// Keep only music tracks; episodes, ads and empty players map to `None`.
pub fn to_now_playing(response: dto::CurrentlyPlaying) -> Option<NowPlaying> {
    if response.currently_playing_type.as_deref() != Some("track") {
        return None;
    }
    let item = response.item?;
    let track_id = item.id.or(item.uri)?;

    Some(NowPlaying {
        track_id,
        title: item.name,
        artists: item.artists.into_iter().map(|a| a.name).collect(),
        artwork_url: item
            .album
            .and_then(|album| album.images.into_iter().next())
            .map(|image| image.url),
        is_playing: response.is_playing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: Option<&str>, uri: Option<&str>) -> dto::Track {
        dto::Track {
            id: id.map(String::from),
            uri: uri.map(String::from),
            name: "Blinding Lights".to_string(),
            artists: vec![
                dto::Artist {
                    name: "The Weeknd".to_string(),
                },
                dto::Artist {
                    name: "Guest".to_string(),
                },
            ],
            album: Some(dto::Album {
                images: vec![dto::Image {
                    url: "https://img/640".to_string(),
                    width: Some(640),
                    height: Some(640),
                }],
            }),
        }
    }

    fn playing(kind: &str, item: Option<dto::Track>) -> dto::CurrentlyPlaying {
        dto::CurrentlyPlaying {
            is_playing: true,
            currently_playing_type: Some(kind.to_string()),
            item,
        }
    }

    #[test]
    fn test_track_converts() {
        let now = to_now_playing(playing("track", Some(track(Some("abc"), None)))).unwrap();
        assert_eq!(now.track_id, "abc");
        assert_eq!(now.primary_artist(), Some("The Weeknd"));
        assert_eq!(now.artists_display(), "The Weeknd, Guest");
        assert_eq!(now.artwork_url.as_deref(), Some("https://img/640"));
    }

    #[test]
    fn test_local_file_falls_back_to_uri() {
        let now = to_now_playing(playing(
            "track",
            Some(track(None, Some("spotify:local:a:b:c:200"))),
        ))
        .unwrap();
        assert_eq!(now.track_id, "spotify:local:a:b:c:200");
    }

    #[test]
    fn test_episodes_and_ads_are_ignored() {
        assert!(to_now_playing(playing("episode", Some(track(Some("x"), None)))).is_none());
        assert!(to_now_playing(playing("ad", None)).is_none());
        assert!(to_now_playing(playing("track", None)).is_none());
    }
}
