use core::fmt;
use core::str::FromStr;

use smol_str::SmolStr;

use crate::Error;

/// A 24-bit RGB accent colour, stored as `0xRRGGBB`.
///
/// On the wire this is the plain integer under the `color` key; values above
/// `0xFFFFFF` are rejected during conversion rather than truncated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Colour(u32);

impl Colour {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Colour {
        Colour(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn to_u32(self) -> u32 {
        self.0
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }
}

impl TryFrom<u32> for Colour {
    type Error = Error;

    fn try_from(value: u32) -> Result<Colour, Error> {
        if value > 0xFF_FFFF {
            return Err(Error::ColourOutOfRange(value));
        }

        Ok(Colour(value))
    }
}

impl From<Colour> for u32 {
    fn from(colour: Colour) -> u32 {
        colour.0
    }
}

impl FromStr for Colour {
    type Err = Error;

    /// Parses `#RRGGBB` or `RRGGBB`.
    fn from_str(s: &str) -> Result<Colour, Error> {
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 {
            return Err(Error::InvalidColour(SmolStr::new(s)));
        }

        match u32::from_str_radix(hex, 16) {
            Ok(value) => Ok(Colour(value)),
            Err(_) => Err(Error::InvalidColour(SmolStr::new(s))),
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Colour, Error};

    #[test]
    fn test_rgb_packing() {
        let colour = Colour::from_rgb(0x12, 0x34, 0x56);

        assert_eq!(colour.to_u32(), 0x123456);
        assert_eq!((colour.r(), colour.g(), colour.b()), (0x12, 0x34, 0x56));
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            Colour::try_from(0x1_000_000),
            Err(Error::ColourOutOfRange(0x1_000_000))
        ));

        assert_eq!(
            Colour::try_from(0xFF_FFFF).unwrap(),
            Colour::from_rgb(0xFF, 0xFF, 0xFF)
        );
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#FF0000".parse::<Colour>().unwrap(), Colour::from_rgb(0xFF, 0, 0));
        assert_eq!("00ff7f".parse::<Colour>().unwrap(), Colour::from_rgb(0, 0xFF, 0x7F));

        assert!("#F00".parse::<Colour>().is_err());
        assert!("nothex".parse::<Colour>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Colour::from_rgb(0, 0xAB, 0xCD).to_string(), "#00ABCD");
    }
}
