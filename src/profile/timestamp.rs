use super::is_gzip;
use crate::error::{Error, Result};
use crate::pprofpb::Profile;
use chrono::{DateTime, Utc};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use prost::Message;
use std::io::{Read, Write};

/// Rewrites the capture time of a pprof profile to now.
pub fn override_timestamp(content: &[u8]) -> Result<Vec<u8>> {
    override_timestamp_at(content, Utc::now())
}

/// Rewrites `time_nanos` of the encoded profile, leaving every other field as
/// is. Gzip compressed input produces gzip compressed output.
pub fn override_timestamp_at(content: &[u8], now: DateTime<Utc>) -> Result<Vec<u8>> {
    let compressed = is_gzip(content);

    let mut p = if compressed {
        let mut decompressed = Vec::new();
        GzDecoder::new(content)
            .read_to_end(&mut decompressed)
            .map_err(Error::Decompress)?;
        Profile::decode(decompressed.as_slice())?
    } else {
        Profile::decode(content)?
    };

    // Out of range only past the year 2262.
    p.time_nanos = now.timestamp_nanos_opt().unwrap_or(i64::MAX);

    let encoded = p.encode_to_vec();
    if !compressed {
        return Ok(encoded);
    }

    let mut encoder = GzEncoder::new(Vec::with_capacity(content.len()), Compression::default());
    encoder.write_all(&encoded).map_err(Error::Encode)?;
    encoder.finish().map_err(Error::Encode)
}
