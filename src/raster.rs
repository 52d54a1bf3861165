//! Rasterization and PNG compression
//!
//! [`Rasterizer`] and [`Encoder`] are the seams between the SVG document and
//! the final image. The resvg and png implementations are behind the `raster`
//! feature.

use thiserror::Error;

use crate::font::FontSet;

/// Errors that can occur while rasterizing an SVG document
#[derive(Error, Debug)]
pub enum RasterError {
    #[error("failed to parse SVG document: {message}")]
    InvalidSvg { message: String },

    #[error("cannot allocate a {width}x{height} canvas")]
    EmptyCanvas { width: u32, height: u32 },
}

/// Errors that can occur while encoding a bitmap
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("PNG encoding failed: {0}")]
    Png(String),

    #[error("bitmap data is {actual} bytes, expected {expected} for its dimensions")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Straight-alpha RGBA pixels, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Bitmap {
    /// RGBA value at `(x, y)`, if in bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

/// Renders an SVG document to pixels
pub trait Rasterizer {
    /// Render `svg` scaled to `width` pixels wide; the height keeps the
    /// document's aspect ratio.
    fn rasterize(&self, svg: &str, width: u32, fonts: &FontSet) -> Result<Bitmap, RasterError>;
}

/// Compresses a bitmap into an image file
pub trait Encoder {
    fn encode(&self, bitmap: &Bitmap) -> Result<Vec<u8>, EncodeError>;
}

#[cfg(feature = "raster")]
pub use self::resvg_impl::ResvgRasterizer;

#[cfg(feature = "raster")]
pub use self::png_impl::PngEncoder;

#[cfg(feature = "raster")]
mod resvg_impl {
    use std::sync::Arc;

    use resvg::tiny_skia;
    use resvg::usvg;

    use super::{Bitmap, RasterError, Rasterizer};
    use crate::font::FontSet;

    /// resvg-backed rasterizer
    #[derive(Debug, Clone, Default)]
    pub struct ResvgRasterizer;

    impl ResvgRasterizer {
        pub fn new() -> Self {
            Self
        }

        fn options(fonts: &FontSet) -> usvg::Options<'static> {
            let mut db = usvg::fontdb::Database::new();
            if fonts.is_empty() {
                db.load_system_fonts();
            } else {
                for face in fonts.faces() {
                    db.load_font_data(face.to_vec());
                }
            }
            log::debug!("font database has {} faces", db.len());

            let mut options = usvg::Options::default();
            options.font_family = fonts.family.clone();
            options.fontdb = Arc::new(db);
            options
        }
    }

    impl Rasterizer for ResvgRasterizer {
        fn rasterize(&self, svg: &str, width: u32, fonts: &FontSet) -> Result<Bitmap, RasterError> {
            let options = Self::options(fonts);
            let tree = usvg::Tree::from_str(svg, &options).map_err(|e| RasterError::InvalidSvg {
                message: e.to_string(),
            })?;

            let size = tree.size();
            let scale = width as f32 / size.width();
            let height = (size.height() * scale).round() as u32;

            let mut pixmap = tiny_skia::Pixmap::new(width, height)
                .ok_or(RasterError::EmptyCanvas { width, height })?;
            resvg::render(
                &tree,
                tiny_skia::Transform::from_scale(scale, scale),
                &mut pixmap.as_mut(),
            );

            // tiny-skia stores premultiplied alpha
            let data = pixmap
                .pixels()
                .iter()
                .flat_map(|p| {
                    let c = p.demultiply();
                    [c.red(), c.green(), c.blue(), c.alpha()]
                })
                .collect();

            log::debug!("rasterized {}x{} bitmap", width, height);
            Ok(Bitmap {
                width,
                height,
                data,
            })
        }
    }
}

#[cfg(feature = "raster")]
mod png_impl {
    use std::collections::HashMap;

    use super::{Bitmap, EncodeError, Encoder};

    /// PNG encoder with optional palette reduction
    ///
    /// In palette mode, a bitmap with at most `colors` distinct RGBA values is
    /// written as an indexed PNG; anything else falls back to truecolor RGBA.
    #[derive(Debug, Clone, PartialEq)]
    pub struct PngEncoder {
        /// 0 (fastest) to 9 (smallest)
        pub compression_level: u8,
        pub palette: bool,
        /// Palette size limit, at most 256
        pub colors: u16,
    }

    impl Default for PngEncoder {
        fn default() -> Self {
            Self {
                compression_level: 9,
                palette: true,
                colors: 256,
            }
        }
    }

    impl PngEncoder {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_compression_level(mut self, level: u8) -> Self {
            self.compression_level = level.min(9);
            self
        }

        pub fn with_palette(mut self, palette: bool) -> Self {
            self.palette = palette;
            self
        }

        pub fn with_colors(mut self, colors: u16) -> Self {
            self.colors = colors.clamp(1, 256);
            self
        }

        fn compression(&self) -> png::Compression {
            match self.compression_level {
                0..=3 => png::Compression::Fast,
                4..=6 => png::Compression::Default,
                _ => png::Compression::Best,
            }
        }

        fn write(
            &self,
            bitmap: &Bitmap,
            indexed: Option<Indexed>,
        ) -> Result<Vec<u8>, png::EncodingError> {
            let mut buf = Vec::new();
            {
                let mut encoder = png::Encoder::new(&mut buf, bitmap.width, bitmap.height);
                encoder.set_depth(png::BitDepth::Eight);
                encoder.set_compression(self.compression());

                match indexed {
                    Some(indexed) => {
                        encoder.set_color(png::ColorType::Indexed);
                        encoder.set_palette(indexed.palette);
                        if let Some(trns) = indexed.trns {
                            encoder.set_trns(trns);
                        }
                        let mut writer = encoder.write_header()?;
                        writer.write_image_data(&indexed.indices)?;
                    }
                    None => {
                        encoder.set_color(png::ColorType::Rgba);
                        let mut writer = encoder.write_header()?;
                        writer.write_image_data(&bitmap.data)?;
                    }
                }
            }
            Ok(buf)
        }
    }

    struct Indexed {
        palette: Vec<u8>,
        trns: Option<Vec<u8>>,
        indices: Vec<u8>,
    }

    /// Build a palette if the bitmap has at most `limit` distinct colors
    fn index_colors(data: &[u8], limit: usize) -> Option<Indexed> {
        let mut lookup: HashMap<[u8; 4], u8> = HashMap::new();
        let mut order: Vec<[u8; 4]> = Vec::new();
        let mut indices = Vec::with_capacity(data.len() / 4);

        for px in data.chunks_exact(4) {
            let color = [px[0], px[1], px[2], px[3]];
            let index = match lookup.get(&color) {
                Some(&i) => i,
                None => {
                    if order.len() >= limit {
                        return None;
                    }
                    let i = order.len() as u8;
                    lookup.insert(color, i);
                    order.push(color);
                    i
                }
            };
            indices.push(index);
        }

        let palette = order.iter().flat_map(|c| [c[0], c[1], c[2]]).collect();
        let trns = order
            .iter()
            .any(|c| c[3] != 255)
            .then(|| order.iter().map(|c| c[3]).collect());

        Some(Indexed {
            palette,
            trns,
            indices,
        })
    }

    impl Encoder for PngEncoder {
        fn encode(&self, bitmap: &Bitmap) -> Result<Vec<u8>, EncodeError> {
            let expected = bitmap.expected_len();
            if bitmap.data.len() != expected {
                return Err(EncodeError::SizeMismatch {
                    expected,
                    actual: bitmap.data.len(),
                });
            }

            let limit = usize::from(self.colors.clamp(1, 256));
            let indexed = if self.palette {
                index_colors(&bitmap.data, limit)
            } else {
                None
            };
            log::debug!(
                "encoding {}x{} PNG ({})",
                bitmap.width,
                bitmap.height,
                if indexed.is_some() { "indexed" } else { "rgba" }
            );

            self.write(bitmap, indexed)
                .map_err(|e| EncodeError::Png(e.to_string()))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

        fn solid(width: u32, height: u32, color: [u8; 4]) -> Bitmap {
            Bitmap {
                width,
                height,
                data: color.repeat((width * height) as usize),
            }
        }

        fn gradient(width: u32, height: u32) -> Bitmap {
            let data = (0..width * height)
                .flat_map(|i| [(i % 256) as u8, (i / 256 % 256) as u8, 7, 255])
                .collect();
            Bitmap {
                width,
                height,
                data,
            }
        }

        fn color_type(bytes: &[u8]) -> png::ColorType {
            let reader = png::Decoder::new(bytes).read_info().unwrap();
            reader.info().color_type
        }

        #[test]
        fn test_output_starts_with_magic() {
            let bytes = PngEncoder::new().encode(&solid(8, 4, [10, 10, 10, 255])).unwrap();
            assert_eq!(bytes[..8], PNG_MAGIC);
        }

        #[test]
        fn test_few_colors_use_palette() {
            let bytes = PngEncoder::new().encode(&solid(8, 4, [10, 20, 30, 255])).unwrap();
            assert_eq!(color_type(&bytes), png::ColorType::Indexed);
        }

        #[test]
        fn test_many_colors_fall_back_to_rgba() {
            let bytes = PngEncoder::new().encode(&gradient(40, 10)).unwrap();
            assert_eq!(color_type(&bytes), png::ColorType::Rgba);
        }

        #[test]
        fn test_palette_disabled() {
            let bytes = PngEncoder::new()
                .with_palette(false)
                .encode(&solid(8, 4, [10, 20, 30, 255]))
                .unwrap();
            assert_eq!(color_type(&bytes), png::ColorType::Rgba);
        }

        #[test]
        fn test_palette_round_trips_pixels() {
            let mut bitmap = solid(4, 2, [255, 0, 0, 255]);
            bitmap.data[4..8].copy_from_slice(&[0, 0, 255, 128]);
            let bytes = PngEncoder::new().encode(&bitmap).unwrap();

            let mut decoder = png::Decoder::new(&bytes[..]);
            decoder.set_transformations(png::Transformations::EXPAND);
            let mut reader = decoder.read_info().unwrap();
            let mut out = vec![0; reader.output_buffer_size()];
            reader.next_frame(&mut out).unwrap();
            assert_eq!(out, bitmap.data);
        }

        #[test]
        fn test_size_mismatch() {
            let bitmap = Bitmap {
                width: 4,
                height: 4,
                data: vec![0; 10],
            };
            let err = PngEncoder::new().encode(&bitmap).unwrap_err();
            assert!(matches!(
                err,
                EncodeError::SizeMismatch {
                    expected: 64,
                    actual: 10
                }
            ));
        }

        #[test]
        fn test_builder_clamps() {
            let encoder = PngEncoder::new().with_compression_level(42).with_colors(1000);
            assert_eq!(encoder.compression_level, 9);
            assert_eq!(encoder.colors, 256);
        }
    }
}
