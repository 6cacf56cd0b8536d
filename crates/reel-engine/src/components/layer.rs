/// Render layer. Controls draw order in the draw list.
///
/// Layers are drawn back-to-front, Background first. The fade overlay is
/// not a layer; it travels as `RenderBuffer::overlay_alpha` and is
/// composited after every instance.
/// Within a layer, instances keep the order the script pushed them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    Background = 0,
    Parallax = 1,
    #[default]
    Objects = 2,
}

impl RenderLayer {
    /// Total number of render layers.
    pub const COUNT: usize = 3;

    /// Convert from a u8 value to a RenderLayer.
    /// Returns None if the value is out of range.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Background),
            1 => Some(Self::Parallax),
            2 => Some(Self::Objects),
            _ => None,
        }
    }

    /// Convert to u8 for the wire format.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}
