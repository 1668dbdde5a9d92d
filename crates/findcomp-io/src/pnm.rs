//! PNM (Portable Any Map) format support
//!
//! Reads binary PGM (P5) and PPM (P6) rasters and writes them back out.
//! ASCII variants (P2/P3) and PBM/PAM are not supported. A PPM is reduced
//! to grayscale on read using the BT.601 luma weights, so downstream
//! analysis always sees a single-channel raster.
//!
//! Header comments (`#` to end of line) are honored between tokens, and
//! only a maximum sample value of 255 is accepted.

use crate::error::{IoError, IoResult};
use findcomp_core::{MAX_SAMPLE, Raster};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Read a PNM raster (P5 grayscale or P6 color) from a reader.
///
/// The reader must be positioned at the magic number. A P6 payload is
/// reduced to grayscale per sample as `0.299 R + 0.587 G + 0.114 B`,
/// truncated.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Raster> {
    let magic = next_token(&mut reader)?;
    let color = match magic.as_str() {
        "P5" => false,
        "P6" => true,
        _ => return Err(IoError::BadMagic(magic)),
    };

    let width = parse_dim(&next_token(&mut reader)?, "width")?;
    let height = parse_dim(&next_token(&mut reader)?, "height")?;
    let max_value = parse_dim(&next_token(&mut reader)?, "maximum sample value")?;

    if width == 0 || height == 0 {
        return Err(IoError::InvalidHeader(format!(
            "zero image dimension {width}x{height}"
        )));
    }
    if max_value != u32::from(MAX_SAMPLE) {
        return Err(IoError::UnsupportedMaxValue(max_value));
    }

    let pixel_count = width as usize * height as usize;
    let expected = if color { pixel_count * 3 } else { pixel_count };
    let mut payload = vec![0u8; expected];
    let mut filled = 0;
    while filled < expected {
        let n = reader.read(&mut payload[filled..])?;
        if n == 0 {
            return Err(IoError::ShortRead {
                expected,
                actual: filled,
            });
        }
        filled += n;
    }

    let samples = if color {
        payload
            .chunks_exact(3)
            .map(|px| luma(px[0], px[1], px[2]))
            .collect()
    } else {
        payload
    };
    Ok(Raster::from_samples(width, height, samples)?)
}

/// Read a PNM raster from a file path.
///
/// The format is chosen by the magic bytes in the file, not by its
/// extension.
pub fn read_pnm_file<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let file = File::open(path)?;
    read_pnm(BufReader::new(file))
}

/// Write a raster as binary PGM (P5).
pub fn write_pgm<W: Write>(raster: &Raster, mut writer: W) -> IoResult<()> {
    write!(
        writer,
        "P5\n{} {}\n{}\n",
        raster.width(),
        raster.height(),
        raster.max_sample()
    )?;
    writer.write_all(raster.samples())?;
    writer.flush()?;
    Ok(())
}

/// Write interleaved RGB data as binary PPM (P6).
///
/// # Errors
///
/// Returns a core [`SampleCountMismatch`](findcomp_core::Error) error if
/// `rgb.len() != width * height * 3`.
pub fn write_ppm<W: Write>(width: u32, height: u32, rgb: &[u8], mut writer: W) -> IoResult<()> {
    let expected = width as usize * height as usize * 3;
    if rgb.len() != expected {
        return Err(findcomp_core::Error::SampleCountMismatch {
            expected,
            actual: rgb.len(),
        }
        .into());
    }
    write!(writer, "P6\n{width} {height}\n{MAX_SAMPLE}\n")?;
    writer.write_all(rgb)?;
    writer.flush()?;
    Ok(())
}

/// BT.601 luma reduction, truncated to a byte.
#[inline]
fn luma(r: u8, g: u8, b: u8) -> u8 {
    (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) as u8
}

fn read_byte<R: BufRead>(reader: &mut R) -> IoResult<Option<u8>> {
    let mut byte = [0u8; 1];
    match reader.read_exact(&mut byte) {
        Ok(()) => Ok(Some(byte[0])),
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Pull the next whitespace-delimited header token, skipping comments.
///
/// Consumes the single whitespace byte that terminates the token, which is
/// exactly the header/payload separator after the final token.
fn next_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = Vec::new();
    loop {
        let Some(byte) = read_byte(reader)? else {
            if token.is_empty() {
                return Err(IoError::InvalidHeader(
                    "unexpected end of header".to_string(),
                ));
            }
            break;
        };
        if byte == b'#' && token.is_empty() {
            while let Some(b) = read_byte(reader)? {
                if b == b'\n' {
                    break;
                }
            }
            continue;
        }
        if byte.is_ascii_whitespace() {
            if token.is_empty() {
                continue;
            }
            break;
        }
        token.push(byte);
    }
    Ok(String::from_utf8_lossy(&token).into_owned())
}

fn parse_dim(token: &str, what: &str) -> IoResult<u32> {
    token
        .parse()
        .map_err(|_| IoError::InvalidHeader(format!("{what} is not a number: {token:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn pgm_bytes(width: u32, height: u32, samples: &[u8]) -> Vec<u8> {
        let mut out = format!("P5\n{width} {height}\n255\n").into_bytes();
        out.extend_from_slice(samples);
        out
    }

    #[test]
    fn test_read_pgm() {
        let data = pgm_bytes(3, 2, &[10, 20, 30, 40, 50, 60]);
        let raster = read_pnm(Cursor::new(data)).unwrap();
        assert_eq!(raster.width(), 3);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.samples(), &[10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn test_read_pgm_with_comments() {
        let mut data = b"P5\n# made by hand\n3 2\n# another comment\n255\n".to_vec();
        data.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
        let raster = read_pnm(Cursor::new(data)).unwrap();
        assert_eq!(raster.width(), 3);
        assert_eq!(raster.samples(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_read_ppm_luma() {
        let mut data = b"P6\n2 1\n255\n".to_vec();
        // pure red and pure white
        data.extend_from_slice(&[255, 0, 0, 255, 255, 255]);
        let raster = read_pnm(Cursor::new(data)).unwrap();
        // 0.299 * 255 = 76.245 truncates to 76
        assert_eq!(raster.samples(), &[76, 255]);
    }

    #[test]
    fn test_bad_magic() {
        let result = read_pnm(Cursor::new(b"P2\n2 2\n255\n".to_vec()));
        assert!(matches!(result, Err(IoError::BadMagic(m)) if m == "P2"));
    }

    #[test]
    fn test_unsupported_max_value() {
        let result = read_pnm(Cursor::new(b"P5\n2 2\n65535\n".to_vec()));
        assert!(matches!(result, Err(IoError::UnsupportedMaxValue(65535))));
    }

    #[test]
    fn test_zero_dimension() {
        let result = read_pnm(Cursor::new(b"P5\n0 2\n255\n".to_vec()));
        assert!(matches!(result, Err(IoError::InvalidHeader(_))));
    }

    #[test]
    fn test_short_payload() {
        let data = pgm_bytes(4, 4, &[0; 7]);
        let result = read_pnm(Cursor::new(data));
        assert!(matches!(
            result,
            Err(IoError::ShortRead {
                expected: 16,
                actual: 7
            })
        ));
    }

    #[test]
    fn test_truncated_header() {
        let result = read_pnm(Cursor::new(b"P5\n3".to_vec()));
        assert!(result.is_err());
    }

    #[test]
    fn test_write_pgm() {
        let raster = Raster::from_samples(2, 2, vec![9, 8, 7, 6]).unwrap();
        let mut out = Vec::new();
        write_pgm(&raster, &mut out).unwrap();
        assert_eq!(out, pgm_bytes(2, 2, &[9, 8, 7, 6]));
    }

    #[test]
    fn test_pgm_round_trip() {
        let raster = Raster::from_samples(3, 3, (0u8..9).collect()).unwrap();
        let mut encoded = Vec::new();
        write_pgm(&raster, &mut encoded).unwrap();
        let decoded = read_pnm(Cursor::new(encoded)).unwrap();
        assert_eq!(decoded.samples(), raster.samples());
    }

    #[test]
    fn test_write_ppm_length_check() {
        let result = write_ppm(2, 2, &[0; 11], Vec::new());
        assert!(matches!(result, Err(IoError::Core(_))));
    }
}
