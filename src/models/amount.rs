use alloy_primitives::U256;
use anyhow::{anyhow, Result};
use std::ops::{Add, Sub};

/// Every token amount is rescaled to this precision before any comparison or
/// arithmetic happens.
pub const COMMON_DECIMALS: u8 = 18;

/// A token amount at the 18-decimal common scale.
///
/// Token quantities routinely exceed what an `f64` or `u64` can hold once
/// scaled to 18 decimals (intermediate sums reach ~10^36), so all bookkeeping
/// stays on `U256` and floating point only appears when the final price ratio
/// is formatted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Wad(U256);

impl Wad {
    pub const ZERO: Wad = Wad(U256::ZERO);

    pub fn from_raw(raw: U256) -> Self {
        Wad(raw)
    }

    /// Rescale a native-unit amount with `decimals` precision to the common
    /// scale: `raw * 10^(18 - decimals)`. The resolver guarantees
    /// `decimals <= 18` before any amount reaches this point.
    pub fn from_native(raw: U256, decimals: u8) -> Self {
        Wad(raw * pow10(COMMON_DECIMALS - decimals))
    }

    /// Parse a human amount like `"5"` or `"1.25"` into common units.
    /// At most 18 fractional digits are accepted.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let (int_part, frac_part) = match text.split_once('.') {
            Some((i, f)) => (i, f),
            None => (text, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(anyhow!("can't parse amount '{}'", text));
        }
        let int = if int_part.is_empty() {
            U256::ZERO
        } else {
            U256::from_str_radix(int_part, 10)
                .map_err(|_| anyhow!("can't parse amount '{}'", text))?
        };
        let frac = if frac_part.is_empty() {
            U256::ZERO
        } else {
            if frac_part.len() > COMMON_DECIMALS as usize {
                return Err(anyhow!(
                    "amount '{}' has more than {} decimal places",
                    text,
                    COMMON_DECIMALS
                ));
            }
            let digits = U256::from_str_radix(frac_part, 10)
                .map_err(|_| anyhow!("can't parse amount '{}'", text))?;
            digits * pow10(COMMON_DECIMALS - frac_part.len() as u8)
        };
        Ok(Wad(int * pow10(COMMON_DECIMALS) + frac))
    }

    pub fn raw(&self) -> U256 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Add for Wad {
    type Output = Wad;

    fn add(self, rhs: Wad) -> Wad {
        Wad(self.0 + rhs.0)
    }
}

impl Sub for Wad {
    type Output = Wad;

    fn sub(self, rhs: Wad) -> Wad {
        Wad(self.0 - rhs.0)
    }
}

fn pow10(exp: u8) -> U256 {
    U256::from(10).pow(U256::from(exp))
}

/// Lossy conversion for display only. Digit strings always parse into `f64`
/// (overflowing ones become infinity), so the fallback is never hit in
/// practice.
pub fn u256_to_f64(value: U256) -> f64 {
    value.to_string().parse::<f64>().unwrap_or_default()
}

/// A native-unit amount as a human-readable float: `raw / 10^decimals`.
pub fn native_to_display(raw: U256, decimals: u8) -> f64 {
    u256_to_f64(raw) / 10f64.powi(decimals as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wad(n: u64) -> Wad {
        Wad::from_native(U256::from(n), 0)
    }

    #[test]
    fn parse_integer_amount() {
        assert_eq!(Wad::parse("5").unwrap(), wad(5));
        assert_eq!(Wad::parse("0").unwrap(), Wad::ZERO);
    }

    #[test]
    fn parse_fractional_amount() {
        let got = Wad::parse("1.25").unwrap();
        let want = Wad::from_raw(U256::from(1_250_000_000_000_000_000u128));
        assert_eq!(got, want);
        assert_eq!(Wad::parse(".5").unwrap(), Wad::parse("0.5").unwrap());
        assert_eq!(Wad::parse("3.").unwrap(), wad(3));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Wad::parse("ololo").is_err());
        assert!(Wad::parse("").is_err());
        assert!(Wad::parse(".").is_err());
        assert!(Wad::parse("1.2.3").is_err());
    }

    #[test]
    fn parse_rejects_too_many_decimal_places() {
        assert!(Wad::parse("1.0000000000000000001").is_err());
        assert!(Wad::parse("1.000000000000000001").is_ok());
    }

    #[test]
    fn native_scaling() {
        // 1 DGD at 9 decimals == 1.0 at the common scale
        let one_dgd = Wad::from_native(U256::from(1_000_000_000u64), 9);
        assert_eq!(one_dgd, wad(1));
        // 18-decimal tokens pass through unscaled
        let raw = U256::from(42u64);
        assert_eq!(Wad::from_native(raw, 18).raw(), raw);
    }

    #[test]
    fn ordering_and_arithmetic() {
        assert!(wad(2) < wad(3));
        assert!(wad(3) >= wad(3));
        assert_eq!(wad(2) + wad(3), wad(5));
        assert_eq!(wad(5) - wad(3), wad(2));
    }

    #[test]
    fn display_conversion() {
        assert_eq!(native_to_display(U256::from(1_500_000u64), 6), 1.5);
        assert_eq!(u256_to_f64(U256::from(123u64)), 123.0);
    }
}
