use rgb::Rgb;

/// Which raster family an image belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// One bit per pixel (PBM).
    Bitmap,
    /// One intensity sample per pixel (PGM).
    Grayscale,
    /// Three samples per pixel, R, G, B (PPM).
    Color,
}

impl Variant {
    /// Samples stored per pixel.
    pub fn channels(&self) -> usize {
        match self {
            Self::Bitmap | Self::Grayscale => 1,
            Self::Color => 3,
        }
    }

    /// In-memory bytes per pixel.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Bitmap => core::mem::size_of::<bool>(),
            Self::Grayscale => core::mem::size_of::<u16>(),
            Self::Color => core::mem::size_of::<Rgb<u16>>(),
        }
    }

    /// Whether the wire header carries a max-value line.
    pub fn has_max_value(&self) -> bool {
        !matches!(self, Self::Bitmap)
    }
}

/// Wire encoding of the pixel payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Whitespace-separated decimal tokens ("plain").
    Ascii,
    /// Raw bytes ("raw").
    Binary,
}

/// One of the six canonical Netpbm formats, i.e. a magic number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PnmFormat {
    /// P1
    PbmAscii,
    /// P2
    PgmAscii,
    /// P3
    PpmAscii,
    /// P4
    PbmBinary,
    /// P5
    PgmBinary,
    /// P6
    PpmBinary,
}

impl PnmFormat {
    pub fn new(variant: Variant, encoding: Encoding) -> Self {
        match (variant, encoding) {
            (Variant::Bitmap, Encoding::Ascii) => Self::PbmAscii,
            (Variant::Grayscale, Encoding::Ascii) => Self::PgmAscii,
            (Variant::Color, Encoding::Ascii) => Self::PpmAscii,
            (Variant::Bitmap, Encoding::Binary) => Self::PbmBinary,
            (Variant::Grayscale, Encoding::Binary) => Self::PgmBinary,
            (Variant::Color, Encoding::Binary) => Self::PpmBinary,
        }
    }

    /// Look up a format by its magic token (`b"P1"` .. `b"P6"`).
    pub fn from_magic(magic: &[u8]) -> Option<Self> {
        match magic {
            b"P1" => Some(Self::PbmAscii),
            b"P2" => Some(Self::PgmAscii),
            b"P3" => Some(Self::PpmAscii),
            b"P4" => Some(Self::PbmBinary),
            b"P5" => Some(Self::PgmBinary),
            b"P6" => Some(Self::PpmBinary),
            _ => None,
        }
    }

    pub fn magic(&self) -> &'static str {
        match self {
            Self::PbmAscii => "P1",
            Self::PgmAscii => "P2",
            Self::PpmAscii => "P3",
            Self::PbmBinary => "P4",
            Self::PgmBinary => "P5",
            Self::PpmBinary => "P6",
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            Self::PbmAscii | Self::PbmBinary => Variant::Bitmap,
            Self::PgmAscii | Self::PgmBinary => Variant::Grayscale,
            Self::PpmAscii | Self::PpmBinary => Variant::Color,
        }
    }

    pub fn encoding(&self) -> Encoding {
        match self {
            Self::PbmAscii | Self::PgmAscii | Self::PpmAscii => Encoding::Ascii,
            Self::PbmBinary | Self::PgmBinary | Self::PpmBinary => Encoding::Binary,
        }
    }
}

/// A single pixel value, tagged with the variant it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pixel {
    /// Bitmap pixel; `true` is set (black).
    Bit(bool),
    Gray(u16),
    Rgb(Rgb<u16>),
}

impl Pixel {
    pub fn variant(&self) -> Variant {
        match self {
            Self::Bit(_) => Variant::Bitmap,
            Self::Gray(_) => Variant::Grayscale,
            Self::Rgb(_) => Variant::Color,
        }
    }
}

/// Luminosity of an RGB sample: `round(0.299 R + 0.587 G + 0.114 B)`.
///
/// Integer arithmetic; ties round up, which matches `f64::round` for the
/// non-negative sums involved.
pub fn luma(px: Rgb<u16>) -> u16 {
    let r = u32::from(px.r);
    let g = u32::from(px.g);
    let b = u32::from(px.b);
    ((r * 299 + g * 587 + b * 114 + 500) / 1000) as u16
}
