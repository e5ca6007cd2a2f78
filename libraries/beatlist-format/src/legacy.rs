//! Legacy JSON playlists
//!
//! Decoding is strict about the JSON shape; translation into the canonical
//! form never fails.

use crate::error::{FormatError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use beatlist_core::{key_from_hex, CanonicalMap, CanonicalPlaylist, MapHash, MapRef};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// File extensions used by legacy playlists
pub const EXTENSIONS: &[&str] = &["bplist", "json"];

/// Tag recorded for songs that carry no usable reference
pub const UNKNOWN_TAG: u8 = u8::MAX;

/// Legacy playlist document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyPlaylist {
    #[serde(default)]
    pub playlist_title: Option<String>,

    #[serde(default)]
    pub playlist_author: Option<String>,

    #[serde(default)]
    pub playlist_description: Option<String>,

    /// Base64 cover, optionally with a `data:` URI header
    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub songs: Vec<LegacySong>,
}

/// One song of a legacy playlist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacySong {
    #[serde(default)]
    pub hash: Option<String>,

    #[serde(default)]
    pub key: Option<String>,

    #[serde(default, rename = "levelid")]
    pub level_id: Option<String>,

    #[serde(default)]
    pub song_name: Option<String>,

    /// RFC 3339 timestamp
    #[serde(default)]
    pub date_added: Option<String>,
}

/// Decode legacy JSON text
pub fn decode(buf: &[u8]) -> Result<LegacyPlaylist> {
    let text = std::str::from_utf8(buf).map_err(|_| FormatError::LegacyEncoding)?;
    let text = text.trim_start_matches('\u{feff}');
    Ok(serde_json::from_str(text)?)
}

/// Decode legacy JSON and translate it into the canonical form
pub fn parse(buf: &[u8]) -> Result<CanonicalPlaylist> {
    let legacy = decode(buf)?;
    Ok(translate(legacy, Utc::now()))
}

/// Map the legacy shape onto the canonical one
///
/// `now` stands in for songs without a usable `dateAdded`.
pub fn translate(legacy: LegacyPlaylist, now: DateTime<Utc>) -> CanonicalPlaylist {
    let now = now.trunc_subsecs(3);

    let maps = legacy
        .songs
        .into_iter()
        .map(|song| CanonicalMap {
            date_added: song_date(song.date_added.as_deref()).unwrap_or(now),
            reference: song_reference(&song),
        })
        .collect();

    CanonicalPlaylist {
        title: legacy.playlist_title.unwrap_or_default(),
        author: legacy.playlist_author.unwrap_or_default(),
        description: legacy.playlist_description.unwrap_or_default(),
        cover: legacy.image.as_deref().map(decode_cover).unwrap_or_default(),
        maps,
    }
}

fn song_reference(song: &LegacySong) -> MapRef {
    if let Some(hash) = song.hash.as_deref().and_then(|h| MapHash::from_hex(h).ok()) {
        return MapRef::Hash(hash);
    }
    if let Some(key) = song.key.as_deref().and_then(key_from_hex) {
        return MapRef::Key(key);
    }
    if let Some(level_id) = song.level_id.as_deref().filter(|id| !id.trim().is_empty()) {
        return MapRef::LevelId(level_id.to_string());
    }

    debug!(song = ?song.song_name, "Legacy song has no usable reference");
    MapRef::Unknown(UNKNOWN_TAG)
}

fn song_date(raw: Option<&str>) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw?.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc).trunc_subsecs(3))
}

fn decode_cover(image: &str) -> Vec<u8> {
    let data = match image.split_once(',') {
        Some((header, data)) if header.starts_with("data:") => data,
        _ => image,
    };

    STANDARD.decode(data.trim()).unwrap_or_else(|e| {
        debug!(error = %e, "Legacy cover is not valid base64, dropping it");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn decodes_full_document() {
        let json = r#"{
            "playlistTitle": "Favourites",
            "playlistAuthor": "me",
            "playlistDescription": "stuff",
            "image": "data:image/png;base64,AQID",
            "songs": [
                {"hash": "ABCD", "songName": "One"},
                {"key": "1a2b"},
                {"levelid": "OneSaber"},
                {"songName": "nothing usable"}
            ]
        }"#;

        let playlist = translate(decode(json.as_bytes()).unwrap(), now());
        assert_eq!(playlist.title, "Favourites");
        assert_eq!(playlist.author, "me");
        assert_eq!(playlist.description, "stuff");
        assert_eq!(playlist.cover, vec![1, 2, 3]);

        let refs: Vec<_> = playlist.maps.iter().map(|m| m.reference.clone()).collect();
        assert_eq!(
            refs,
            vec![
                MapRef::Hash(MapHash::from_hex("abcd").unwrap()),
                MapRef::Key(0x1a2b),
                MapRef::LevelId("OneSaber".into()),
                MapRef::Unknown(UNKNOWN_TAG),
            ]
        );
        assert!(playlist.maps.iter().all(|m| m.date_added == now()));
    }

    #[test]
    fn minimal_document() {
        let playlist = parse(br#"{"songs":[{"hash":"ABCD"}]}"#).unwrap();
        assert_eq!(playlist.title, "");
        assert!(playlist.cover.is_empty());
        assert_eq!(playlist.maps.len(), 1);
    }

    #[test]
    fn empty_object_is_an_empty_playlist() {
        let playlist = parse(b"{}").unwrap();
        assert!(playlist.maps.is_empty());
    }

    #[test]
    fn hash_wins_over_key() {
        let song = LegacySong {
            hash: Some("ab12".into()),
            key: Some("ff".into()),
            ..LegacySong::default()
        };
        assert!(matches!(song_reference(&song), MapRef::Hash(_)));
    }

    #[test]
    fn bad_hash_falls_back_to_key() {
        let song = LegacySong {
            hash: Some("not hex".into()),
            key: Some("ff".into()),
            ..LegacySong::default()
        };
        assert_eq!(song_reference(&song), MapRef::Key(0xff));
    }

    #[test]
    fn keeps_valid_date_added() {
        let json = br#"{"songs":[{"hash":"ab","dateAdded":"2020-01-02T03:04:05.678901Z"}]}"#;
        let playlist = translate(decode(json).unwrap(), now());
        assert_eq!(
            playlist.maps[0].date_added,
            Utc.timestamp_millis_opt(1_577_934_245_678).unwrap()
        );
    }

    #[test]
    fn bad_date_uses_now() {
        let json = br#"{"songs":[{"hash":"ab","dateAdded":"yesterday"}]}"#;
        let playlist = translate(decode(json).unwrap(), now());
        assert_eq!(playlist.maps[0].date_added, now());
    }

    #[test]
    fn plain_base64_cover_and_garbage_cover() {
        assert_eq!(decode_cover("AQID"), vec![1, 2, 3]);
        assert!(decode_cover("%%%").is_empty());
    }

    #[test]
    fn utf8_bom_is_ignored() {
        let mut buf = "\u{feff}".as_bytes().to_vec();
        buf.extend_from_slice(br#"{"playlistTitle":"bom"}"#);
        assert_eq!(parse(&buf).unwrap().title, "bom");
    }

    #[test]
    fn malformed_json_fails() {
        assert!(matches!(parse(b"{not json"), Err(FormatError::LegacyJson(_))));
        assert!(matches!(parse(b""), Err(FormatError::LegacyJson(_))));
        assert!(matches!(
            parse(br#"{"songs": "nope"}"#),
            Err(FormatError::LegacyJson(_))
        ));
        assert!(matches!(parse(&[0xff, 0xfe, 0x00]), Err(FormatError::LegacyEncoding)));
    }
}
