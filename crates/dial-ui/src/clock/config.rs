use dial_engine::paint::Color;

use super::controller::ClockMode;

/// Colors used to paint a dial.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DialPalette {
    pub marks: Color,
    pub text: Color,
    pub pivot: Color,
    pub hour: Color,
    pub minute: Color,
    pub second: Color,
}

impl Default for DialPalette {
    fn default() -> Self {
        Self {
            marks: Color::BLACK,
            text: Color::BLACK,
            pivot: Color::BLACK,
            hour: Color::rgb(0x33, 0x33, 0x33),
            minute: Color::rgb(0x55, 0x55, 0x55),
            second: Color::rgb(0xff, 0xa5, 0x00),
        }
    }
}

/// User-facing options of an analog clock.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockConfig {
    /// Edge length of the square widget in logical pixels.
    pub size: f32,
    pub mode: ClockMode,
    /// Number of tick marks around the rim; `0` hides the rim.
    pub marks: u32,
    /// Whether the numerals 1–12 are drawn.
    pub ticks: bool,
    pub palette: DialPalette,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            size: 200.0,
            mode: ClockMode::Clock,
            marks: 60,
            ticks: true,
            palette: DialPalette::default(),
        }
    }
}

/// What a successfully applied attribute affects.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AttributeChange {
    /// Geometry or decoration changed; the style must be rebuilt.
    Layout,
    /// The requested mode; the controller decides whether it is a change.
    Mode(ClockMode),
    /// Unknown attribute or unusable value; nothing changed.
    Ignored,
}

impl ClockConfig {
    pub fn size(mut self, v: f32) -> Self { self.size = v; self }
    pub fn mode(mut self, v: ClockMode) -> Self { self.mode = v; self }
    pub fn marks(mut self, v: u32) -> Self { self.marks = v; self }
    pub fn ticks(mut self, v: bool) -> Self { self.ticks = v; self }
    pub fn palette(mut self, v: DialPalette) -> Self { self.palette = v; self }

    /// Applies a string attribute the way a markup host would deliver it.
    ///
    /// Recognized names are `size`, `mode`, `marks` and `ticks`. `ticks` is
    /// true for any value other than `"false"`. Values that do not parse
    /// leave the config untouched.
    pub fn apply_attribute(&mut self, name: &str, value: &str) -> AttributeChange {
        let value = value.trim();
        match name {
            "size" => match value.parse::<f32>() {
                Ok(v) if v.is_finite() && v > 0.0 => {
                    self.size = v;
                    AttributeChange::Layout
                }
                _ => ignored(name, value),
            },
            "mode" => match value.parse::<ClockMode>() {
                Ok(mode) => {
                    self.mode = mode;
                    AttributeChange::Mode(mode)
                }
                Err(_) => ignored(name, value),
            },
            "marks" => match value.parse::<u32>() {
                Ok(v) => {
                    self.marks = v;
                    AttributeChange::Layout
                }
                Err(_) => ignored(name, value),
            },
            "ticks" => {
                self.ticks = value != "false";
                AttributeChange::Layout
            }
            _ => ignored(name, value),
        }
    }
}

fn ignored(name: &str, value: &str) -> AttributeChange {
    log::debug!("clock config: ignoring attribute {name}={value:?}");
    AttributeChange::Ignored
}
