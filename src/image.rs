use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use imgref::ImgVec;
use rgb::Rgb;

use crate::error::PnmError;
use crate::pixel::{Encoding, Pixel, PnmFormat, Variant};

/// Typed pixel storage, one arm per variant.
#[derive(Clone)]
pub(crate) enum Pixels {
    Bitmap(ImgVec<bool>),
    Grayscale(ImgVec<u16>),
    Color(ImgVec<Rgb<u16>>),
}

fn same_pixels<T: PartialEq>(a: &ImgVec<T>, b: &ImgVec<T>) -> bool {
    a.width() == b.width() && a.height() == b.height() && a.buf() == b.buf()
}

impl PartialEq for Pixels {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Pixels::Bitmap(a), Pixels::Bitmap(b)) => same_pixels(a, b),
            (Pixels::Grayscale(a), Pixels::Grayscale(b)) => same_pixels(a, b),
            (Pixels::Color(a), Pixels::Color(b)) => same_pixels(a, b),
            _ => false,
        }
    }
}

impl Pixels {
    pub(crate) fn variant(&self) -> Variant {
        match self {
            Pixels::Bitmap(_) => Variant::Bitmap,
            Pixels::Grayscale(_) => Variant::Grayscale,
            Pixels::Color(_) => Variant::Color,
        }
    }

    fn width(&self) -> usize {
        match self {
            Pixels::Bitmap(img) => img.width(),
            Pixels::Grayscale(img) => img.width(),
            Pixels::Color(img) => img.width(),
        }
    }

    fn height(&self) -> usize {
        match self {
            Pixels::Bitmap(img) => img.height(),
            Pixels::Grayscale(img) => img.height(),
            Pixels::Color(img) => img.height(),
        }
    }
}

/// A fully decoded Netpbm image.
///
/// The variant (bitmap, grayscale, color) is fixed by the pixel storage, the
/// encoding (ASCII or binary) is a plain field, and together they determine
/// the magic number written on encode.
///
/// Invariants upheld by every constructor and mutator:
/// - width and height are positive and the buffer holds `width * height` pixels;
/// - every grayscale/color sample lies in `0..=max_value`;
/// - `max_value` is in `1..=65535` (bitmaps carry `1`, which is never written).
#[derive(Clone, PartialEq)]
pub struct Image {
    pub(crate) pixels: Pixels,
    pub(crate) encoding: Encoding,
    pub(crate) max_value: u16,
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("format", &self.format())
            .field("max_value", &self.max_value())
            .finish_non_exhaustive()
    }
}

pub(crate) fn pixel_count(width: u32, height: u32) -> Result<usize, PnmError> {
    if width == 0 || height == 0 {
        return Err(PnmError::ZeroDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(PnmError::DimensionsTooLarge { width, height })
}

fn check_max_value(max_value: u16) -> Result<(), PnmError> {
    if max_value == 0 {
        return Err(PnmError::InvalidMaxValue(0));
    }
    Ok(())
}

fn check_len(expected: usize, actual: usize) -> Result<(), PnmError> {
    if expected != actual {
        return Err(PnmError::BufferSizeMismatch { expected, actual });
    }
    Ok(())
}

impl Image {
    /// All-clear bitmap.
    pub fn new_bitmap(width: u32, height: u32, encoding: Encoding) -> Result<Self, PnmError> {
        let n = pixel_count(width, height)?;
        Self::from_bitmap_pixels(width, height, vec![false; n], encoding)
    }

    /// All-zero (black) grayscale image.
    pub fn new_grayscale(
        width: u32,
        height: u32,
        max_value: u16,
        encoding: Encoding,
    ) -> Result<Self, PnmError> {
        let n = pixel_count(width, height)?;
        Self::from_gray_pixels(width, height, max_value, vec![0; n], encoding)
    }

    /// All-zero (black) color image.
    pub fn new_color(
        width: u32,
        height: u32,
        max_value: u16,
        encoding: Encoding,
    ) -> Result<Self, PnmError> {
        let n = pixel_count(width, height)?;
        Self::from_color_pixels(width, height, max_value, vec![Rgb::new(0, 0, 0); n], encoding)
    }

    /// Build a bitmap from row-major pixels (`true` = set).
    pub fn from_bitmap_pixels(
        width: u32,
        height: u32,
        pixels: Vec<bool>,
        encoding: Encoding,
    ) -> Result<Self, PnmError> {
        check_len(pixel_count(width, height)?, pixels.len())?;
        Ok(Self {
            pixels: Pixels::Bitmap(ImgVec::new(pixels, width as usize, height as usize)),
            encoding,
            max_value: 1,
        })
    }

    /// Build a grayscale image from row-major samples.
    pub fn from_gray_pixels(
        width: u32,
        height: u32,
        max_value: u16,
        pixels: Vec<u16>,
        encoding: Encoding,
    ) -> Result<Self, PnmError> {
        check_max_value(max_value)?;
        check_len(pixel_count(width, height)?, pixels.len())?;
        if let Some(&value) = pixels.iter().find(|&&v| v > max_value) {
            return Err(PnmError::SampleOutOfRange {
                value: u32::from(value),
                max_value,
            });
        }
        Ok(Self {
            pixels: Pixels::Grayscale(ImgVec::new(pixels, width as usize, height as usize)),
            encoding,
            max_value,
        })
    }

    /// Build a color image from row-major RGB samples.
    pub fn from_color_pixels(
        width: u32,
        height: u32,
        max_value: u16,
        pixels: Vec<Rgb<u16>>,
        encoding: Encoding,
    ) -> Result<Self, PnmError> {
        check_max_value(max_value)?;
        check_len(pixel_count(width, height)?, pixels.len())?;
        if let Some(px) = pixels
            .iter()
            .find(|px| px.r > max_value || px.g > max_value || px.b > max_value)
        {
            let value = px.r.max(px.g).max(px.b);
            return Err(PnmError::SampleOutOfRange {
                value: u32::from(value),
                max_value,
            });
        }
        Ok(Self {
            pixels: Pixels::Color(ImgVec::new(pixels, width as usize, height as usize)),
            encoding,
            max_value,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width() as u32
    }

    pub fn height(&self) -> u32 {
        self.pixels.height() as u32
    }

    pub fn variant(&self) -> Variant {
        self.pixels.variant()
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// The magic number this image encodes to.
    pub fn format(&self) -> PnmFormat {
        PnmFormat::new(self.variant(), self.encoding)
    }

    /// Switch between ASCII and binary output. The variant is untouched, so
    /// the magic number stays consistent.
    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.encoding = encoding;
    }

    /// Max sample value; `None` for bitmaps.
    pub fn max_value(&self) -> Option<u16> {
        self.variant().has_max_value().then_some(self.max_value)
    }

    /// Change the max value, rescaling every sample as `v * new / old`.
    pub fn set_max_value(&mut self, max_value: u16) -> Result<(), PnmError> {
        check_max_value(max_value)?;
        let old = u32::from(self.max_value);
        let new = u32::from(max_value);
        let scale = |v: u16| (u32::from(v) * new / old) as u16;
        match &mut self.pixels {
            Pixels::Bitmap(_) => {
                return Err(PnmError::VariantMismatch {
                    expected: Variant::Grayscale,
                    actual: Variant::Bitmap,
                });
            }
            Pixels::Grayscale(img) => {
                for v in img.buf_mut().iter_mut() {
                    *v = scale(*v);
                }
            }
            Pixels::Color(img) => {
                for px in img.buf_mut().iter_mut() {
                    *px = Rgb::new(scale(px.r), scale(px.g), scale(px.b));
                }
            }
        }
        log::trace!("rescaled samples from max {old} to {new}");
        self.max_value = max_value;
        Ok(())
    }

    fn index(&self, x: u32, y: u32) -> Result<usize, PnmError> {
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return Err(PnmError::OutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        Ok(y as usize * width as usize + x as usize)
    }

    /// Read the pixel at `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> Result<Pixel, PnmError> {
        let i = self.index(x, y)?;
        Ok(match &self.pixels {
            Pixels::Bitmap(img) => Pixel::Bit(img.buf()[i]),
            Pixels::Grayscale(img) => Pixel::Gray(img.buf()[i]),
            Pixels::Color(img) => Pixel::Rgb(img.buf()[i]),
        })
    }

    /// Write the pixel at `(x, y)`.
    ///
    /// The pixel must match the image variant and lie within `max_value`.
    pub fn set(&mut self, x: u32, y: u32, pixel: Pixel) -> Result<(), PnmError> {
        let i = self.index(x, y)?;
        let max_value = self.max_value;
        let out_of_range = |value: u16| PnmError::SampleOutOfRange {
            value: u32::from(value),
            max_value,
        };
        match (&mut self.pixels, pixel) {
            (Pixels::Bitmap(img), Pixel::Bit(bit)) => img.buf_mut()[i] = bit,
            (Pixels::Grayscale(img), Pixel::Gray(v)) => {
                if v > max_value {
                    return Err(out_of_range(v));
                }
                img.buf_mut()[i] = v;
            }
            (Pixels::Color(img), Pixel::Rgb(px)) => {
                let hi = px.r.max(px.g).max(px.b);
                if hi > max_value {
                    return Err(out_of_range(hi));
                }
                img.buf_mut()[i] = px;
            }
            (pixels, pixel) => {
                return Err(PnmError::VariantMismatch {
                    expected: pixels.variant(),
                    actual: pixel.variant(),
                });
            }
        }
        Ok(())
    }

    /// Bitmap pixels, if this is a bitmap.
    pub fn as_bitmap(&self) -> Option<&ImgVec<bool>> {
        match &self.pixels {
            Pixels::Bitmap(img) => Some(img),
            _ => None,
        }
    }

    /// Mutable row-major bitmap pixels. Any bit pattern is valid, but the
    /// geometry is fixed, so only the slice is handed out.
    pub fn as_bitmap_mut(&mut self) -> Option<&mut [bool]> {
        match &mut self.pixels {
            Pixels::Bitmap(img) => Some(img.buf_mut().as_mut_slice()),
            _ => None,
        }
    }

    /// Grayscale samples, if this is a grayscale image.
    pub fn as_grayscale(&self) -> Option<&ImgVec<u16>> {
        match &self.pixels {
            Pixels::Grayscale(img) => Some(img),
            _ => None,
        }
    }

    /// RGB samples, if this is a color image.
    pub fn as_color(&self) -> Option<&ImgVec<Rgb<u16>>> {
        match &self.pixels {
            Pixels::Color(img) => Some(img),
            _ => None,
        }
    }
}
