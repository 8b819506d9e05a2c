//! Component formatting
//!
//! Vectors print as `"(x, y, z, w)"` with every component rendered through
//! the same [`NumberFormat`]. Patterns follow the familiar standard numeric
//! format letters:
//!
//! | Pattern      | Meaning                                   | `-1234` rendered               |
//! |--------------|-------------------------------------------|--------------------------------|
//! | `F<n>`       | fixed point, `n` decimals                 | `F2` → `-1234.00`              |
//! | `N<n>`       | fixed point with digit grouping           | `N1` → `-1,234.0`              |
//! | `D<n>`       | integer, zero-padded to `n` digits        | `D6` → `-001234`               |
//! | `X<n>`/`x<n>`| hex of the 32-bit pattern, padded to `n`  | `X` → `FFFFFB2E`               |
//! | `G`, empty   | general (plain integer)                   | `G` → `-1234`                  |
//!
//! An empty pattern passed to [`Vec4i::format`] means `F0`.

use std::fmt::Write as _;
use std::str::FromStr;

use crate::error::{MathError, MathResult};
use crate::Vec4i;

/// Decimals used by `F` and `N` when no precision is given
const DEFAULT_DECIMALS: u8 = 2;

/// Highest precision a pattern may carry
const MAX_PRECISION: u8 = 99;

/// Culture-specific symbols used while formatting
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberLocale {
    pub decimal_separator: char,
    pub group_separator: char,
    pub negative_sign: char,
}

impl NumberLocale {
    /// Culture-neutral symbols: `.` decimals, `,` groups, `-` sign
    pub const INVARIANT: Self = Self {
        decimal_separator: '.',
        group_separator: ',',
        negative_sign: '-',
    };
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::INVARIANT
    }
}

/// A parsed numeric format pattern
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberFormat {
    /// `F<n>`
    Fixed { decimals: u8 },
    /// `N<n>`
    Grouped { decimals: u8 },
    /// `D<n>`
    Decimal { min_digits: u8 },
    /// `X<n>` or `x<n>`
    Hex { min_digits: u8, uppercase: bool },
    /// `G` or empty
    General,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::Fixed { decimals: 0 }
    }
}

impl NumberFormat {
    /// Parse a pattern such as `"F0"`, `"N2"`, `"D4"` or `"x8"`
    pub fn parse(pattern: &str) -> MathResult<Self> {
        let pattern = pattern.trim();
        let mut chars = pattern.chars();
        let Some(letter) = chars.next() else {
            return Ok(NumberFormat::General);
        };
        let digits = chars.as_str();
        let precision = if digits.is_empty() {
            None
        } else {
            match digits.parse::<u8>() {
                Ok(p) if p <= MAX_PRECISION && digits.bytes().all(|b| b.is_ascii_digit()) => Some(p),
                _ => return Err(unknown_pattern(pattern)),
            }
        };

        let format = match letter {
            'F' | 'f' => NumberFormat::Fixed {
                decimals: precision.unwrap_or(DEFAULT_DECIMALS),
            },
            'N' | 'n' => NumberFormat::Grouped {
                decimals: precision.unwrap_or(DEFAULT_DECIMALS),
            },
            'D' | 'd' => NumberFormat::Decimal {
                min_digits: precision.unwrap_or(0),
            },
            'X' | 'x' => NumberFormat::Hex {
                min_digits: precision.unwrap_or(0),
                uppercase: letter == 'X',
            },
            'G' | 'g' => NumberFormat::General,
            _ => return Err(unknown_pattern(pattern)),
        };
        Ok(format)
    }

    /// Render a single integer
    pub fn format_int(self, value: i32, locale: &NumberLocale) -> String {
        let magnitude = (value as i64).unsigned_abs();
        let mut out = String::new();

        if let NumberFormat::Hex { min_digits, uppercase } = self {
            let width = min_digits as usize;
            let bits = value as u32;
            // Writing to a String cannot fail.
            let _ = if uppercase {
                write!(out, "{:0width$X}", bits)
            } else {
                write!(out, "{:0width$x}", bits)
            };
            return out;
        }

        if value < 0 {
            out.push(locale.negative_sign);
        }
        match self {
            NumberFormat::Fixed { decimals } => {
                out.push_str(&magnitude.to_string());
                push_decimals(&mut out, decimals, locale);
            }
            NumberFormat::Grouped { decimals } => {
                out.push_str(&group_digits(&magnitude.to_string(), locale.group_separator));
                push_decimals(&mut out, decimals, locale);
            }
            NumberFormat::Decimal { min_digits } => {
                let width = min_digits as usize;
                let _ = write!(out, "{:0width$}", magnitude);
            }
            NumberFormat::General | NumberFormat::Hex { .. } => {
                out.push_str(&magnitude.to_string());
            }
        }
        out
    }
}

impl FromStr for NumberFormat {
    type Err = MathError;

    fn from_str(s: &str) -> MathResult<Self> {
        Self::parse(s)
    }
}

fn unknown_pattern(pattern: &str) -> MathError {
    MathError::invalid_argument(format!("unknown number format pattern '{}'", pattern))
}

fn push_decimals(out: &mut String, decimals: u8, locale: &NumberLocale) {
    if decimals > 0 {
        out.push(locale.decimal_separator);
        out.extend(std::iter::repeat('0').take(decimals as usize));
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

impl Vec4i {
    /// Format every component with `pattern` using invariant symbols
    pub fn format(self, pattern: &str) -> MathResult<String> {
        self.format_with(pattern, &NumberLocale::INVARIANT)
    }

    /// Format every component with `pattern` using `locale`
    ///
    /// An empty pattern means `F0`.
    pub fn format_with(self, pattern: &str, locale: &NumberLocale) -> MathResult<String> {
        let format = if pattern.trim().is_empty() {
            NumberFormat::default()
        } else {
            NumberFormat::parse(pattern)?
        };
        let [x, y, z, w] = self.to_array().map(|c| format.format_int(c, locale));
        Ok(format!("({}, {}, {}, {})", x, y, z, w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GERMAN: NumberLocale = NumberLocale {
        decimal_separator: ',',
        group_separator: '.',
        negative_sign: '-',
    };

    #[test]
    fn test_parse_patterns() {
        assert_eq!(NumberFormat::parse("F0"), Ok(NumberFormat::Fixed { decimals: 0 }));
        assert_eq!(NumberFormat::parse("f3"), Ok(NumberFormat::Fixed { decimals: 3 }));
        assert_eq!(NumberFormat::parse("F"), Ok(NumberFormat::Fixed { decimals: 2 }));
        assert_eq!(NumberFormat::parse("N1"), Ok(NumberFormat::Grouped { decimals: 1 }));
        assert_eq!(NumberFormat::parse("D4"), Ok(NumberFormat::Decimal { min_digits: 4 }));
        assert_eq!(
            NumberFormat::parse("x8"),
            Ok(NumberFormat::Hex { min_digits: 8, uppercase: false })
        );
        assert_eq!(NumberFormat::parse(""), Ok(NumberFormat::General));
        assert_eq!("G".parse::<NumberFormat>(), Ok(NumberFormat::General));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(matches!(NumberFormat::parse("Q2"), Err(MathError::InvalidArgument(_))));
        assert!(matches!(NumberFormat::parse("F-1"), Err(MathError::InvalidArgument(_))));
        assert!(matches!(NumberFormat::parse("F100"), Err(MathError::InvalidArgument(_))));
    }

    #[test]
    fn test_default_format() {
        let v = Vec4i::new(1, -2, 3, 4);
        assert_eq!(v.format("").unwrap(), "(1, -2, 3, 4)");
        assert_eq!(v.format("").unwrap(), v.to_string());
    }

    #[test]
    fn test_fixed_and_grouped() {
        let v = Vec4i::new(1234567, -1234, 0, 12);
        assert_eq!(v.format("F2").unwrap(), "(1234567.00, -1234.00, 0.00, 12.00)");
        assert_eq!(v.format("N0").unwrap(), "(1,234,567, -1,234, 0, 12)");
        assert_eq!(v.format_with("N1", &GERMAN).unwrap(), "(1.234.567,0, -1.234,0, 0,0, 12,0)");
    }

    #[test]
    fn test_decimal_padding() {
        let v = Vec4i::new(5, -42, 1000, 0);
        assert_eq!(v.format("D3").unwrap(), "(005, -042, 1000, 000)");
    }

    #[test]
    fn test_hex_uses_bit_pattern() {
        let v = Vec4i::new(255, -1, 16, 0);
        assert_eq!(v.format("X").unwrap(), "(FF, FFFFFFFF, 10, 0)");
        assert_eq!(v.format("x4").unwrap(), "(00ff, ffffffff, 0010, 0000)");
    }

    #[test]
    fn test_min_value() {
        let v = Vec4i::splat(i32::MIN);
        assert_eq!(
            NumberFormat::General.format_int(v.x, &NumberLocale::INVARIANT),
            "-2147483648"
        );
    }
}
