//! Decoder for the line-oriented ASCII pixel-map format.
//!
//! Layout: line 0 is a magic tag, line 1 a comment, line 2 the
//! `"<width> <height>"` header, line 3 reserved. From line 4 on, one integer
//! per line, three consecutive lines forming one (r, g, b) pixel, consumed in
//! row-major order. Values beyond `width * height * 3` are ignored.
mod error;
mod options;

pub use self::error::DecodeError;
pub use self::options::{DecodeOptions, ShortData};

use crate::image::{io::read_lines, PixelGrid, Rgb8};
use std::path::Path;

/// Zero-based line index of the `"<width> <height>"` header.
const HEADER_LINE: usize = 2;
/// Zero-based line index of the first channel value.
const DATA_START: usize = 4;

/// Read a pixmap file and decode it into a [`PixelGrid`].
pub fn read_pixmap(path: &Path, options: DecodeOptions) -> Result<PixelGrid, DecodeError> {
    let lines = read_lines(path)?;
    decode_lines(&lines, options)
}

/// Decode raw text lines into a [`PixelGrid`].
pub fn decode_lines<S: AsRef<str>>(
    lines: &[S],
    options: DecodeOptions,
) -> Result<PixelGrid, DecodeError> {
    let header = lines
        .get(HEADER_LINE)
        .ok_or(DecodeError::MissingHeader)?
        .as_ref();
    let (w, h) = parse_header(header)?;

    let expected = w * h * 3;
    if expected == 0 {
        return Ok(PixelGrid::new(w, h));
    }

    let values = lines.get(DATA_START..).unwrap_or(&[]);
    let take = expected.min(values.len());
    let mut channels = Vec::with_capacity(take);
    for (i, line) in values.iter().take(take).enumerate() {
        let text = line.as_ref().trim();
        let value: u8 = text.parse().map_err(|_| DecodeError::InvalidValue {
            line: DATA_START + i,
            value: text.to_string(),
        })?;
        channels.push(value);
    }

    let height = if channels.len() < expected {
        match options.short_data {
            ShortData::Error => {
                return Err(DecodeError::InsufficientData {
                    expected,
                    got: channels.len(),
                })
            }
            // Whole rows only; a partial trailing row is dropped.
            ShortData::TruncateRows => channels.len() / (w * 3),
        }
    } else {
        h
    };

    let data: Vec<Rgb8> = channels[..height * w * 3]
        .chunks_exact(3)
        .map(|c| Rgb8::new(c[0], c[1], c[2]))
        .collect();
    Ok(PixelGrid {
        w,
        h: height,
        stride: w,
        data,
    })
}

fn parse_header(line: &str) -> Result<(usize, usize), DecodeError> {
    let malformed = || DecodeError::MalformedHeader(line.to_string());
    let (w, h) = line.split_once(' ').ok_or_else(malformed)?;
    let w = w.trim().parse().map_err(|_| malformed())?;
    let h = h.trim().parse().map_err(|_| malformed())?;
    Ok((w, h))
}
