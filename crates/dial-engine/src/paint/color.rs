/// Straight-alpha sRGB color, one byte per channel.
///
/// Vector output (SVG/CSS) consumes straight alpha directly, so no
/// premultiplication happens at this layer.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Builds a color from `[r, g, b, a]` bytes as produced by the `.mkml`
    /// color literal `#rrggbbaa`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::rgba(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// CSS/SVG representation.
    ///
    /// Opaque colors render as `#rrggbb`, fully transparent ones as
    /// `transparent`, anything else as `rgba(r, g, b, a)`.
    pub fn to_css(self) -> String {
        match self.a {
            0xff => format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b),
            0 => "transparent".to_string(),
            a => format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, a as f32 / 255.0),
        }
    }
}
