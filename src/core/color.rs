use rand::Rng;

/// 8-bit RGBA color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Random opaque-ish color with every RGB channel drawn from `lo..=hi`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, lo: u8, hi: u8, alpha: u8) -> Self {
        Self {
            r: rng.random_range(lo..=hi),
            g: rng.random_range(lo..=hi),
            b: rng.random_range(lo..=hi),
            a: alpha,
        }
    }

    /// Packed as 0xAABBGGRR (little-endian RGBA bytes, ImageData layout)
    #[inline]
    pub fn to_u32(self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, self.a])
    }
}

/// Shift a channel by `delta`, clamped to `[0, max]`.
#[inline]
pub fn shift_channel(channel: u8, delta: i32, max: u8) -> u8 {
    (channel as i32 + delta).clamp(0, max as i32) as u8
}
