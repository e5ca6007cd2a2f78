//! Binary playlist container
//!
//! Layout (integers little-endian):
//!
//! ```text
//! magic        8 bytes  "Blist.v2"
//! title        u32 len + UTF-8
//! author       u32 len + UTF-8
//! description  u32 len + UTF-8
//! cover        u32 len + bytes
//! map count    u32
//! maps         u32 entry len + entry
//!
//! entry:
//! date added   i64 (ms since Unix epoch)
//! tag          u8 (0 key, 1 hash, 2 zip, 3 level id)
//! payload      key: u32 | hash, zip: u32 len + bytes | level id: u32 len + UTF-8
//! ```
//!
//! Every map entry is length-prefixed, so entries with a tag this build does
//! not know are skipped and surface as [`MapRef::Unknown`].

use crate::error::{FormatError, Result};
use beatlist_core::{CanonicalMap, CanonicalPlaylist, MapHash, MapRef};
use bytes::{Buf, BufMut, BytesMut};
use chrono::{DateTime, TimeZone, Utc};

/// Format marker at the start of every binary playlist
pub const MAGIC: &[u8; 8] = b"Blist.v2";

/// File extension of binary playlists
pub const EXTENSION: &str = "blist";

const TAG_KEY: u8 = 0;
const TAG_HASH: u8 = 1;
const TAG_ZIP: u8 = 2;
const TAG_LEVEL_ID: u8 = 3;

/// Check that a buffer starts with the binary format marker
pub fn validate_magic(buf: &[u8]) -> Result<()> {
    if buf.len() < MAGIC.len() {
        return Err(FormatError::MissingMagic);
    }
    if &buf[..MAGIC.len()] != MAGIC {
        return Err(FormatError::BadMagic);
    }
    Ok(())
}

/// Encode a playlist into the binary container
pub fn serialize(playlist: &CanonicalPlaylist) -> Result<Vec<u8>> {
    let mut out = BytesMut::with_capacity(64 + playlist.cover.len() + playlist.maps.len() * 40);
    out.put_slice(MAGIC);

    put_bytes(&mut out, "title", playlist.title.as_bytes())?;
    put_bytes(&mut out, "author", playlist.author.as_bytes())?;
    put_bytes(&mut out, "description", playlist.description.as_bytes())?;
    put_bytes(&mut out, "cover", &playlist.cover)?;

    out.put_u32_le(checked_len("maps", playlist.maps.len())?);
    for map in &playlist.maps {
        let entry = encode_map(map)?;
        put_bytes(&mut out, "map entry", &entry)?;
    }

    Ok(out.to_vec())
}

/// Decode a binary container into a playlist
pub fn deserialize(buf: &[u8]) -> Result<CanonicalPlaylist> {
    validate_magic(buf)?;
    let mut reader = &buf[MAGIC.len()..];

    let title = get_string(&mut reader, "title")?;
    let author = get_string(&mut reader, "author")?;
    let description = get_string(&mut reader, "description")?;
    let cover = get_bytes(&mut reader)?;

    let count = get_u32(&mut reader)? as usize;
    // Each entry needs at least its own length prefix
    ensure(&reader, count.saturating_mul(4))?;

    let mut maps = Vec::with_capacity(count);
    for _ in 0..count {
        let entry = get_bytes(&mut reader)?;
        maps.push(decode_map(&entry)?);
    }

    if reader.has_remaining() {
        return Err(FormatError::TrailingBytes(reader.remaining()));
    }

    Ok(CanonicalPlaylist {
        title,
        author,
        description,
        cover,
        maps,
    })
}

fn encode_map(map: &CanonicalMap) -> Result<BytesMut> {
    let mut entry = BytesMut::with_capacity(32);
    entry.put_i64_le(map.date_added.timestamp_millis());

    match &map.reference {
        MapRef::Key(key) => {
            entry.put_u8(TAG_KEY);
            entry.put_u32_le(*key);
        }
        MapRef::Hash(hash) => {
            entry.put_u8(TAG_HASH);
            put_bytes(&mut entry, "hash", hash.as_bytes())?;
        }
        MapRef::Zip(data) => {
            entry.put_u8(TAG_ZIP);
            put_bytes(&mut entry, "zip", data)?;
        }
        MapRef::LevelId(id) => {
            entry.put_u8(TAG_LEVEL_ID);
            put_bytes(&mut entry, "level id", id.as_bytes())?;
        }
        MapRef::Unknown(tag) => {
            entry.put_u8(*tag);
        }
    }

    Ok(entry)
}

fn decode_map(mut entry: &[u8]) -> Result<CanonicalMap> {
    ensure(&entry, 9)?;
    let millis = entry.get_i64_le();
    let date_added = timestamp(millis)?;
    let tag = entry.get_u8();

    let reference = match tag {
        TAG_KEY => MapRef::Key(get_u32(&mut entry)?),
        TAG_HASH => MapRef::Hash(MapHash::from_bytes(get_bytes(&mut entry)?)),
        TAG_ZIP => MapRef::Zip(get_bytes(&mut entry)?),
        TAG_LEVEL_ID => MapRef::LevelId(get_string(&mut entry, "level id")?),
        other => MapRef::Unknown(other),
    };

    Ok(CanonicalMap {
        date_added,
        reference,
    })
}

fn timestamp(millis: i64) -> Result<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or(FormatError::InvalidTimestamp(millis))
}

fn checked_len(field: &'static str, len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| FormatError::TooLarge { field, len })
}

fn put_bytes(out: &mut BytesMut, field: &'static str, data: &[u8]) -> Result<()> {
    out.put_u32_le(checked_len(field, data.len())?);
    out.put_slice(data);
    Ok(())
}

fn ensure(reader: &[u8], needed: usize) -> Result<()> {
    if reader.remaining() < needed {
        return Err(FormatError::Truncated {
            needed,
            remaining: reader.remaining(),
        });
    }
    Ok(())
}

fn get_u32(reader: &mut &[u8]) -> Result<u32> {
    ensure(reader, 4)?;
    Ok(reader.get_u32_le())
}

fn get_bytes(reader: &mut &[u8]) -> Result<Vec<u8>> {
    let len = get_u32(reader)? as usize;
    ensure(reader, len)?;
    let data = reader[..len].to_vec();
    reader.advance(len);
    Ok(data)
}

fn get_string(reader: &mut &[u8], field: &'static str) -> Result<String> {
    String::from_utf8(get_bytes(reader)?).map_err(|_| FormatError::InvalidUtf8(field))
}
