use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, iter::Sum, ops::Add};

/// Minor units per currency unit.
pub const MINOR_PER_UNIT: u64 = 100;

/// A non-negative amount in the single implied plan currency.
///
/// Stored as integer minor units so sums and the contingency percentage stay
/// exact; rounding only happens when an amount is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// Build an amount from whole currency units
    pub const fn from_units(units: u64) -> Self {
        Amount(units * MINOR_PER_UNIT)
    }

    pub const fn from_minor(minor: u64) -> Self {
        Amount(minor)
    }

    pub const fn minor_units(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Value in major units, for display and JSON output only
    pub fn as_major(self) -> f64 {
        self.0 as f64 / MINOR_PER_UNIT as f64
    }

    pub fn checked_mul(self, factor: u64) -> Option<Self> {
        self.0.checked_mul(factor).map(Amount)
    }

    pub fn checked_add(self, other: Amount) -> Option<Self> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// `percent`% of this amount, truncated to a whole minor unit.
    ///
    /// Exact whenever the amount is a multiple of `100 / gcd(100, percent)`
    /// minor units, which holds for every whole-unit rate table.
    pub fn percent(self, percent: u64) -> Self {
        Amount((self.0 as u128 * percent as u128 / 100) as u64)
    }

    /// Share of `total` this amount represents, as a percentage
    pub fn share_of(self, total: Amount) -> f64 {
        if total.is_zero() {
            0.0
        } else {
            self.0 as f64 * 100.0 / total.0 as f64
        }
    }

    /// Even split across `parts`, in major units
    pub fn split(self, parts: u64) -> f64 {
        if parts == 0 {
            return 0.0;
        }
        self.as_major() / parts as f64
    }

    /// Even split across `parts`, rounded half up to a whole minor unit.
    /// Zero parts yield zero.
    pub fn divided_by(self, parts: u64) -> Self {
        if parts == 0 {
            return Amount::ZERO;
        }
        let parts = parts as u128;
        Amount(((self.0 as u128 * 2 + parts) / (parts * 2)) as u64)
    }

    /// Render with a currency symbol and thousands separators, e.g. `₹62,700.00`
    pub fn display_with(self, symbol: &str) -> String {
        format!("{}{}", symbol, group_thousands(self))
    }
}

fn group_thousands(amount: Amount) -> String {
    let units = (amount.0 / MINOR_PER_UNIT).to_string();
    let minor = amount.0 % MINOR_PER_UNIT;

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (idx, ch) in units.chars().enumerate() {
        if idx > 0 && (units.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}.{:02}", grouped, minor)
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / MINOR_PER_UNIT, self.0 % MINOR_PER_UNIT)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_major())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let major = f64::deserialize(deserializer)?;
        if !major.is_finite() || major < 0.0 {
            return Err(de::Error::custom(format!(
                "amount must be a non-negative number, got {}",
                major
            )));
        }
        Ok(Amount((major * MINOR_PER_UNIT as f64).round() as u64))
    }
}
