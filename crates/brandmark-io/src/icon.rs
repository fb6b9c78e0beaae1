//! ICO container writer and reader.
//!
//! An `.ico` file is a small directory header followed by one image per
//! resolution. Entries are stored PNG-compressed, which every browser that
//! reads `favicon.ico` understands.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::RgbaImage;

/// Package `images` into an icon container written to `writer`, one entry
/// per image, in the given order.
pub fn write_icon<W: Write>(images: &[RgbaImage], writer: W) -> io::Result<()> {
    let mut dir = IconDir::new(ResourceType::Icon);
    for img in images {
        let icon = IconImage::from_rgba_data(img.width(), img.height(), img.as_raw().clone());
        dir.add_entry(IconDirEntry::encode_as_png(&icon)?);
    }
    dir.write(writer)
}

/// Write an icon container to `path`, replacing any existing file.
pub fn write_icon_file(images: &[RgbaImage], path: &Path) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_icon(images, &mut out)?;
    out.flush()
}

/// Dimensions of every entry in an icon container, in directory order.
pub fn read_icon_sizes<R: Read + Seek>(reader: R) -> io::Result<Vec<(u32, u32)>> {
    let dir = IconDir::read(reader)?;
    Ok(dir
        .entries()
        .iter()
        .map(|entry| (entry.width(), entry.height()))
        .collect())
}

/// Dimensions of every entry in the icon container at `path`.
pub fn inspect_icon(path: &Path) -> io::Result<Vec<(u32, u32)>> {
    read_icon_sizes(BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::io::Cursor;

    fn solid(size: u32) -> RgbaImage {
        RgbaImage::from_pixel(size, size, Rgba([139, 92, 246, 255]))
    }

    #[test]
    fn test_write_and_read_sizes() {
        let images = vec![solid(16), solid(32), solid(48)];
        let mut buffer: Vec<u8> = Vec::new();
        write_icon(&images, &mut buffer).unwrap();

        // ICONDIR header: reserved 0, type 1, count 3.
        assert_eq!(&buffer[..6], &[0, 0, 1, 0, 3, 0]);

        let sizes = read_icon_sizes(Cursor::new(buffer)).unwrap();
        assert_eq!(sizes, vec![(16, 16), (32, 32), (48, 48)]);
    }

    #[test]
    fn test_entry_pixels_survive() {
        let images = vec![solid(16)];
        let mut buffer: Vec<u8> = Vec::new();
        write_icon(&images, &mut buffer).unwrap();

        let dir = IconDir::read(Cursor::new(buffer)).unwrap();
        let decoded = dir.entries()[0].decode().unwrap();
        assert_eq!(decoded.rgba_data(), images[0].as_raw().as_slice());
    }
}
