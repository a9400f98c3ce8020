// 📅 Year Resolver - Republic (民國) vs Gregorian birth years
//
// The reference year is always passed in. Nothing here reads the clock.
//
//   0 < y ≤ roc(reference) + 2           → Republic year, y + 1911
//   1850 ≤ y ≤ reference + 2             → already Gregorian
//   anything else                        → no birth year (silently)

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Gregorian year of Republic year 0
pub const ROC_OFFSET: i32 = 1911;

/// Earliest plausible Gregorian birth year
pub const MIN_GREGORIAN_YEAR: i32 = 1850;

/// Years past the reference year still accepted (planned births)
pub const FUTURE_BUFFER: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearEra {
    /// Input was a Republic-calendar year (民國年)
    Republic,
    /// Input was already Gregorian
    Gregorian,
}

/// BirthYear - A resolved Gregorian year and how it was read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthYear {
    pub gregorian: i32,
    pub era: YearEra,
}

impl BirthYear {
    /// The same year on the Republic calendar (≤ 0 for years before 1912)
    pub fn republic(&self) -> i32 {
        self.gregorian - ROC_OFFSET
    }
}

/// Resolve a digit-only year token against a reference Gregorian year
///
/// Absent, malformed, or out-of-range tokens all yield None.
pub fn resolve_birth_year(token: Option<&str>, reference_year: i32) -> Option<BirthYear> {
    let token = token.map(str::trim).filter(|t| !t.is_empty())?;

    if !token.chars().all(|c| c.is_ascii_digit()) {
        debug!(token, "year token is not all digits");
        return None;
    }

    // Overlong digit runs overflow and land here as out of range
    let Ok(y) = token.parse::<i64>() else {
        debug!(token, "year token out of range");
        return None;
    };

    let reference = i64::from(reference_year);
    let current_roc = reference - i64::from(ROC_OFFSET);
    let future_buffer = i64::from(FUTURE_BUFFER);

    if y > 0 && y <= current_roc + future_buffer {
        return Some(BirthYear {
            gregorian: (y + i64::from(ROC_OFFSET)) as i32,
            era: YearEra::Republic,
        });
    }

    if y >= i64::from(MIN_GREGORIAN_YEAR) && y <= reference + future_buffer {
        return Some(BirthYear {
            gregorian: y as i32,
            era: YearEra::Gregorian,
        });
    }

    debug!(token, reference_year, "year token outside plausible range");
    None
}
