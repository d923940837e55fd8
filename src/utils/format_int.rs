use std::fmt::{self, Write};

/// Integer displayed with `'` between groups of three digits, e.g. `1'234'567`.
pub struct NiceInt(i128);

impl NiceInt {
    pub fn from(value: impl Into<i128>) -> Self {
        Self(value.into())
    }

    /// Fractional part is truncated.
    pub fn from_f64(value: f64) -> Self {
        Self(value as i128)
    }
}

impl fmt::Display for NiceInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        if self.0 < 0 {
            f.write_char('-')?;
        }
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                f.write_char('\'')?;
            }
            f.write_char(digit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::NiceInt;

    #[test]
    fn test_delimiters() {
        assert_eq!(NiceInt::from(0u8).to_string(), "0");
        assert_eq!(NiceInt::from(999u32).to_string(), "999");
        assert_eq!(NiceInt::from(1_234_567u64).to_string(), "1'234'567");
        assert_eq!(NiceInt::from(-12_345i64).to_string(), "-12'345");
        assert_eq!(NiceInt::from_f64(1000.7).to_string(), "1'000");
    }
}
