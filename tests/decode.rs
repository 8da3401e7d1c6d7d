mod common;

use common::synthetic_grid::{gradient_grid, pixmap_text};
use pixmap_filter::decode::{decode_lines, read_pixmap, DecodeError, DecodeOptions, ShortData};
use std::fs;

#[test]
fn text_encoding_round_trips_through_the_decoder() {
    let grid = gradient_grid(8, 5);
    let text = pixmap_text(&grid);
    let lines: Vec<&str> = text.lines().collect();
    let decoded = decode_lines(&lines, DecodeOptions::default()).expect("decode");
    assert_eq!(decoded, grid);
}

#[test]
fn read_pixmap_decodes_a_file() {
    let grid = gradient_grid(3, 3);
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("picture.txt");
    fs::write(&path, pixmap_text(&grid)).expect("write pixmap");

    let decoded = read_pixmap(&path, DecodeOptions::default()).expect("decode file");
    assert_eq!(decoded, grid);
}

#[test]
fn read_pixmap_reports_missing_file_as_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = read_pixmap(&dir.path().join("absent.txt"), DecodeOptions::default()).unwrap_err();
    assert!(matches!(err, DecodeError::Io(_)), "unexpected error: {err:?}");
}

#[test]
fn truncated_file_keeps_complete_rows_in_tolerant_mode() {
    let grid = gradient_grid(4, 3);
    let text = pixmap_text(&grid);
    // Drop the last row's worth of values plus one channel.
    let keep = text.lines().count() - (4 * 3 + 1);
    let lines: Vec<&str> = text.lines().take(keep).collect();

    let strict = decode_lines(&lines, DecodeOptions::default());
    assert!(matches!(
        strict,
        Err(DecodeError::InsufficientData { expected: 36, .. })
    ));

    let options = DecodeOptions::default().with_short_data(ShortData::TruncateRows);
    let decoded = decode_lines(&lines, options).expect("tolerant decode");
    assert_eq!((decoded.w, decoded.h), (4, 1));
    assert_eq!(decoded.get(0, 3), grid.get(0, 3));
}
