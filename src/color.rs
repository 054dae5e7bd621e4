/// Sequential color ramp for cell fills, scaled by the layer's max total.

use crate::constants::DEFAULT_COLOR_STOPS;
use crate::error::{HexMapError, Result};
use crate::math_utils::{clamp, inverse_lerp, lerp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub fn parse_hex(hex: &str) -> Result<Rgb> {
        let invalid = || HexMapError::InvalidColor(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        Ok(Rgb([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
    }

    pub fn to_hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    stops: Vec<Rgb>,
}

impl ColorRamp {
    pub fn from_hex_stops<S: AsRef<str>>(stops: &[S]) -> Result<ColorRamp> {
        let stops = stops
            .iter()
            .map(|stop| Rgb::parse_hex(stop.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        if stops.is_empty() {
            return Err(HexMapError::InvalidColor(String::new()));
        }
        Ok(ColorRamp { stops })
    }

    /// Fill color for `value` on a `0..=max` scale. Non-positive `max` maps
    /// everything to the first stop.
    pub fn color_for(&self, value: f64, max: f64) -> String {
        self.rgb_for(value, max).to_hex()
    }

    pub fn rgb_for(&self, value: f64, max: f64) -> Rgb {
        let first = self.stops[0];
        if self.stops.len() == 1 || !(max > 0.0) {
            return first;
        }
        let ratio = clamp(inverse_lerp(0.0, max, value), 0.0, 1.0);
        let position = ratio * (self.stops.len() - 1) as f64;
        let lower = position.floor() as usize;
        if lower >= self.stops.len() - 1 {
            return self.stops[self.stops.len() - 1];
        }
        let local = position - lower as f64;
        let (from, to) = (self.stops[lower].0, self.stops[lower + 1].0);
        let mix = |i: usize| lerp(f64::from(from[i]), f64::from(to[i]), local).round() as u8;
        Rgb([mix(0), mix(1), mix(2)])
    }
}

impl Default for ColorRamp {
    fn default() -> Self {
        let stops = DEFAULT_COLOR_STOPS
            .iter()
            .filter_map(|stop| Rgb::parse_hex(stop).ok())
            .collect();
        ColorRamp { stops }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_hex() {
        let rgb = Rgb::parse_hex("#fd8d3c").unwrap();
        assert_eq!(rgb, Rgb([0xfd, 0x8d, 0x3c]));
        assert_eq!(rgb.to_hex(), "#fd8d3c");
        assert!(Rgb::parse_hex("fd8d3c").is_err());
        assert!(Rgb::parse_hex("#fd8d3").is_err());
        assert!(Rgb::parse_hex("#gggggg").is_err());
    }

    #[test]
    fn endpoints_hit_first_and_last_stop() {
        let ramp = ColorRamp::default();
        assert_eq!(ramp.color_for(0.0, 120.0), DEFAULT_COLOR_STOPS[0]);
        assert_eq!(ramp.color_for(120.0, 120.0), DEFAULT_COLOR_STOPS[4]);
        assert_eq!(ramp.color_for(500.0, 120.0), DEFAULT_COLOR_STOPS[4]);
    }

    #[test]
    fn zero_max_maps_to_first_stop() {
        let ramp = ColorRamp::default();
        assert_eq!(ramp.color_for(3.0, 0.0), DEFAULT_COLOR_STOPS[0]);
    }

    #[test]
    fn interpolates_between_stops() {
        let ramp = ColorRamp::from_hex_stops(&["#000000", "#ff00ff"]).unwrap();
        assert_eq!(ramp.rgb_for(5.0, 10.0), Rgb([128, 0, 128]));
    }

    #[test]
    fn rejects_empty_ramp() {
        let stops: [&str; 0] = [];
        assert!(ColorRamp::from_hex_stops(&stops).is_err());
    }
}
