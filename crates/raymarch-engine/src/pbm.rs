//! ASCII portable bitmap (`P1`) export and import.
//!
//! Layout:
//!
//! ```text
//! P1
//! <width> <height>
//! <row 0: width values separated by single spaces>
//! ...
//! <row height-1>
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::bitmap::Bitmap;
use crate::error::{RenderError, Result};

/// Write `bitmap` as P1 text to `writer`.
pub fn write_pbm<W: Write>(bitmap: &Bitmap, mut writer: W) -> std::io::Result<()> {
    writer.write_all(header(bitmap).as_bytes())?;
    for row in bitmap.rows() {
        writer.write_all(format_row(row).as_bytes())?;
    }
    writer.flush()
}

/// Render `bitmap` as a P1 string.
pub fn to_pbm_string(bitmap: &Bitmap) -> String {
    let mut text = header(bitmap);
    for row in bitmap.rows() {
        text.push_str(&format_row(row));
    }
    text
}

fn header(bitmap: &Bitmap) -> String {
    format!("P1\n{} {}\n", bitmap.width(), bitmap.height())
}

/// One row: values separated by single spaces, newline-terminated.
fn format_row(row: &[u8]) -> String {
    let mut line = String::with_capacity(row.len() * 2);
    for (i, value) in row.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push(if *value == 0 { '0' } else { '1' });
    }
    line.push('\n');
    line
}

/// Write `bitmap` to a P1 file at `path`.
///
/// The file handle is flushed and closed before returning.
pub fn export_pbm(bitmap: &Bitmap, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let to_err = |source| RenderError::Export {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_err)?;
    write_pbm(bitmap, BufWriter::new(file)).map_err(to_err)
}

/// Parse P1 text into a bitmap.
///
/// Whitespace between tokens is free-form and `#` starts a comment that
/// runs to the end of the line. Values may also be packed without
/// separators, as P1 permits.
pub fn parse_pbm(text: &str) -> Result<Bitmap> {
    let mut tokens = text
        .lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(str::split_whitespace);

    match tokens.next() {
        Some("P1") => {}
        Some(other) => {
            return Err(RenderError::MalformedBitmap(format!(
                "expected magic P1, found {other:?}"
            )))
        }
        None => return Err(RenderError::MalformedBitmap("empty input".into())),
    }

    let mut dimension = |name: &str| -> Result<usize> {
        let token = tokens
            .next()
            .ok_or_else(|| RenderError::MalformedBitmap(format!("missing {name}")))?;
        token
            .parse::<usize>()
            .map_err(|_| RenderError::MalformedBitmap(format!("invalid {name} {token:?}")))
    };
    let width = dimension("width")?;
    let height = dimension("height")?;

    let expected = width.checked_mul(height).ok_or_else(|| {
        RenderError::MalformedBitmap(format!("dimensions {width}x{height} overflow"))
    })?;
    // The header is untrusted; size the buffer from the input instead.
    let mut cells = Vec::with_capacity(expected.min(text.len()));
    for token in tokens {
        for ch in token.chars() {
            match ch {
                '0' => cells.push(0),
                '1' => cells.push(1),
                other => {
                    return Err(RenderError::MalformedBitmap(format!(
                        "invalid pixel value {other:?}"
                    )))
                }
            }
        }
    }

    if cells.len() != expected {
        return Err(RenderError::MalformedBitmap(format!(
            "expected {expected} values for {width}x{height}, found {}",
            cells.len()
        )));
    }

    Bitmap::from_cells(width, height, cells)
        .ok_or_else(|| RenderError::MalformedBitmap("cell data mismatch".into()))
}
