//! Geometric transforms and cross-variant conversions.
//!
//! Geometry is implemented once over `ImgVec<T>` and dispatched per variant.
//! Invert and the flips work in place; rotation and conversions consume the
//! image and return a new one.

use alloc::vec::Vec;

use imgref::ImgVec;
use log::trace;
use rgb::Rgb;

use crate::image::{Image, Pixels};
use crate::pixel::luma;

/// Max value given to images produced from bitmaps.
const CONVERTED_MAX: u16 = 255;

fn flip_rows<T>(img: &mut ImgVec<T>) {
    let width = img.width();
    for row in img.buf_mut().chunks_exact_mut(width) {
        row.reverse();
    }
}

fn flip_columns<T>(img: &mut ImgVec<T>) {
    let (width, height) = (img.width(), img.height());
    let buf = img.buf_mut();
    for y in 0..height / 2 {
        let (top, bottom) = buf.split_at_mut((height - 1 - y) * width);
        top[y * width..(y + 1) * width].swap_with_slice(&mut bottom[..width]);
    }
}

/// `out(x', y') = in(y', height - x' - 1)`, i.e. transpose then mirror rows.
fn rotate_cw<T: Copy>(img: &ImgVec<T>) -> ImgVec<T> {
    let (width, height) = (img.width(), img.height());
    let src = img.buf();
    let mut out = Vec::with_capacity(width * height);
    for y in 0..width {
        out.extend((0..height).map(|x| src[(height - 1 - x) * width + y]));
    }
    ImgVec::new(out, height, width)
}

fn map_pixels<T: Copy, U>(img: &ImgVec<T>, f: impl Fn(T) -> U) -> ImgVec<U> {
    let out = img.buf().iter().map(|&px| f(px)).collect();
    ImgVec::new(out, img.width(), img.height())
}

impl Image {
    /// Bitmaps flip every bit; samples become `max_value - v`.
    pub fn invert(&mut self) {
        let max = self.max_value;
        match &mut self.pixels {
            Pixels::Bitmap(img) => img.buf_mut().iter_mut().for_each(|b| *b = !*b),
            Pixels::Grayscale(img) => img.buf_mut().iter_mut().for_each(|v| *v = max - *v),
            Pixels::Color(img) => img
                .buf_mut()
                .iter_mut()
                .for_each(|px| *px = Rgb::new(max - px.r, max - px.g, max - px.b)),
        }
    }

    /// Mirror left-right: reverse pixel order within each row.
    pub fn flip_horizontal(&mut self) {
        match &mut self.pixels {
            Pixels::Bitmap(img) => flip_rows(img),
            Pixels::Grayscale(img) => flip_rows(img),
            Pixels::Color(img) => flip_rows(img),
        }
    }

    /// Mirror top-bottom: reverse row order.
    pub fn flip_vertical(&mut self) {
        match &mut self.pixels {
            Pixels::Bitmap(img) => flip_columns(img),
            Pixels::Grayscale(img) => flip_columns(img),
            Pixels::Color(img) => flip_columns(img),
        }
    }

    /// Rotate 90° clockwise. Width and height swap; variant, encoding, and
    /// max value carry over.
    pub fn rotate_90_clockwise(self) -> Image {
        let pixels = match &self.pixels {
            Pixels::Bitmap(img) => Pixels::Bitmap(rotate_cw(img)),
            Pixels::Grayscale(img) => Pixels::Grayscale(rotate_cw(img)),
            Pixels::Color(img) => Pixels::Color(rotate_cw(img)),
        };
        Image { pixels, ..self }
    }

    /// Convert to grayscale.
    ///
    /// Color uses the luminosity weights (see [`luma`]) and keeps the max
    /// value. Bitmaps map set to `0` and clear to `255`. Grayscale is
    /// returned unchanged.
    pub fn into_grayscale(self) -> Image {
        let from = self.variant();
        let max = self.max_value;
        let (pixels, max_value) = match self.pixels {
            Pixels::Grayscale(img) => (Pixels::Grayscale(img), max),
            Pixels::Color(img) => (
                Pixels::Grayscale(map_pixels(&img, |px| luma(px).min(max))),
                max,
            ),
            Pixels::Bitmap(img) => (
                Pixels::Grayscale(map_pixels(&img, |set| if set { 0 } else { CONVERTED_MAX })),
                CONVERTED_MAX,
            ),
        };
        trace!("converted {from:?} to grayscale");
        Image {
            pixels,
            encoding: self.encoding,
            max_value,
        }
    }

    /// Threshold into a bitmap.
    ///
    /// A pixel is set (black) when its intensity is strictly below
    /// `max_value / 2`. Color intensity is the integer mean of R, G, B.
    /// Bitmaps are returned unchanged.
    pub fn into_bitmap(self) -> Image {
        let from = self.variant();
        let threshold = u32::from(self.max_value / 2);
        let pixels = match self.pixels {
            Pixels::Bitmap(img) => Pixels::Bitmap(img),
            Pixels::Grayscale(img) => {
                Pixels::Bitmap(map_pixels(&img, |v| u32::from(v) < threshold))
            }
            Pixels::Color(img) => Pixels::Bitmap(map_pixels(&img, |px| {
                let average = (u32::from(px.r) + u32::from(px.g) + u32::from(px.b)) / 3;
                average < threshold
            })),
        };
        trace!("thresholded {from:?} at {threshold} into bitmap");
        Image {
            pixels,
            encoding: self.encoding,
            max_value: 1,
        }
    }

    /// Convert to color.
    ///
    /// Grayscale replicates into R = G = B and keeps the max value. Bitmaps
    /// map set to black and clear to white at max `255`. Color is returned
    /// unchanged.
    pub fn into_color(self) -> Image {
        let from = self.variant();
        let max = self.max_value;
        let (pixels, max_value) = match self.pixels {
            Pixels::Color(img) => (Pixels::Color(img), max),
            Pixels::Grayscale(img) => (
                Pixels::Color(map_pixels(&img, |v| Rgb::new(v, v, v))),
                max,
            ),
            Pixels::Bitmap(img) => {
                let white = Rgb::new(CONVERTED_MAX, CONVERTED_MAX, CONVERTED_MAX);
                let black = Rgb::new(0, 0, 0);
                (
                    Pixels::Color(map_pixels(&img, |set| if set { black } else { white })),
                    CONVERTED_MAX,
                )
            }
        };
        trace!("converted {from:?} to color");
        Image {
            pixels,
            encoding: self.encoding,
            max_value,
        }
    }
}
