use std::fmt;
use std::str::FromStr;

use serde::de::Error;

/// 8-bit sRGB color that serializes to a string like `"#ff8c00"`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// sRGB component values.
    pub rgb: [u8; 3],
}
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode(self.rgb))
    }
}
impl FromStr for Rgb {
    type Err = hex::FromHexError;

    /// Parses a hex string like `#ff8c00` or `#f80`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rgb = [0_u8; 3];
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() == 3 {
            let doubled: String = s.chars().flat_map(|c| [c, c]).collect();
            hex::decode_to_slice(doubled, &mut rgb)?;
        } else {
            hex::decode_to_slice(s, &mut rgb)?;
        }
        Ok(Rgb { rgb })
    }
}
impl serde::Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_string().serialize(serializer)
    }
}
impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Self>().map_err(D::Error::custom)
    }
}
impl Rgb {
    /// Pure black
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Constructs a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b] }
    }

    /// Blends `top` over `self` with the given opacity in the range `0.0..=1.0`.
    ///
    /// Blending is done directly on sRGB values.
    #[must_use]
    pub fn blend(self, top: Rgb, alpha: f32) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        let mut rgb = self.rgb;
        for (dst, src) in rgb.iter_mut().zip(top.rgb) {
            let mixed = f32::from(*dst) * (1.0 - alpha) + f32::from(src) * alpha;
            *dst = mixed.round() as u8;
        }
        Rgb { rgb }
    }

    /// Returns the color as opaque RGBA components.
    pub fn to_rgba(self) -> [u8; 4] {
        let [r, g, b] = self.rgb;
        [r, g, b, 255]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!("#ff8c00".parse(), Ok(Rgb::new(255, 140, 0)));
        assert_eq!("f80".parse(), Ok(Rgb::new(255, 136, 0)));
        assert_eq!(Rgb::new(45, 137, 239).to_string(), "#2d89ef");
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#zzzzzz".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_blend() {
        assert_eq!(Rgb::BLACK.blend(Rgb::WHITE, 0.0), Rgb::BLACK);
        assert_eq!(Rgb::BLACK.blend(Rgb::WHITE, 1.0), Rgb::WHITE);
        assert_eq!(Rgb::BLACK.blend(Rgb::WHITE, 2.0), Rgb::WHITE);
        assert_eq!(Rgb::BLACK.blend(Rgb::WHITE, 0.5), Rgb::new(128, 128, 128));
    }
}
