/// Vertical padding inside the touchable strip, applied at both ends.
pub const STRIP_INSET: f32 = 8.0;

const STRIP_EXTRA_WIDTH: f32 = 10.0;
const VISIBLE_AREA_RATIO: f32 = 0.95;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Metrics of the index bar.
///
/// `font_scale` is the host's accessibility text scale; labels are `font_size * font_scale`
/// tall, rounded up.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IndexBarStyle {
    pub font_size: f32,
    pub font_scale: f32,
    pub dark: bool,
}

impl Default for IndexBarStyle {
    fn default() -> Self {
        Self {
            font_size: 10.0,
            font_scale: 1.0,
            dark: false,
        }
    }
}

impl IndexBarStyle {
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_font_scale(mut self, font_scale: f32) -> Self {
        self.font_scale = font_scale;
        self
    }

    pub fn with_dark(mut self, dark: bool) -> Self {
        self.dark = dark;
        self
    }

    /// Height of one label (and its font size after scaling).
    pub fn label_height(&self) -> f32 {
        ceil_non_negative(self.font_size * self.font_scale)
    }

    pub fn strip_width(&self) -> f32 {
        self.label_height() + STRIP_EXTRA_WIDTH
    }

    /// Height of the area labels may occupy inside a container of `container_height`.
    pub fn visible_area(&self, container_height: f32) -> f32 {
        container_height * VISIBLE_AREA_RATIO
    }

    pub fn text_color(&self) -> Rgba {
        if self.dark {
            Rgba {
                r: 0xff,
                g: 0xff,
                b: 0xff,
                a: 0xee,
            }
        } else {
            Rgba {
                r: 0x11,
                g: 0x11,
                b: 0x11,
                a: 0xff,
            }
        }
    }
}

fn ceil_non_negative(v: f32) -> f32 {
    if !(v > 0.0) {
        return 0.0;
    }
    let t = v as u32 as f32;
    if t < v { t + 1.0 } else { t }
}
