//! Two-state logic values with truth-table-based operators.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// A single two-state logic value.
///
/// The simulation engine is strictly combinational and two-valued: every
/// signal slot holds exactly `Zero` or `One`. Values arriving from outside
/// (level JSON, CLI assignments) are coerced into this domain at the
/// boundary via [`Bit::from_u8`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum Bit {
    /// Logic low (0).
    Zero = 0,
    /// Logic high (1).
    One = 1,
}

impl Bit {
    /// Converts a character to a [`Bit`] value. Accepts '0' and '1'.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }

    /// Coerces an integer to a bit by taking its low bit.
    ///
    /// This is the domain-coercion rule of the engine: any external value
    /// enters the {0,1} domain through this function.
    pub fn from_u8(v: u8) -> Self {
        if v & 1 == 1 {
            Bit::One
        } else {
            Bit::Zero
        }
    }

    /// Returns the value as 0 or 1.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns `true` for `One`.
    pub fn is_high(self) -> bool {
        self == Bit::One
    }
}

impl From<bool> for Bit {
    fn from(b: bool) -> Self {
        if b {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl From<Bit> for bool {
    fn from(b: Bit) -> bool {
        b.is_high()
    }
}

impl Default for Bit {
    fn default() -> Self {
        Bit::Zero
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bit::Zero => write!(f, "0"),
            Bit::One => write!(f, "1"),
        }
    }
}

impl BitAnd for Bit {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Bit::from(self.is_high() && rhs.is_high())
    }
}

impl BitOr for Bit {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Bit::from(self.is_high() || rhs.is_high())
    }
}

impl BitXor for Bit {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Bit::from(self.is_high() != rhs.is_high())
    }
}

impl Not for Bit {
    type Output = Self;

    fn not(self) -> Self {
        Bit::from(!self.is_high())
    }
}

/// Serialized as the integer 0 or 1, matching the level JSON schema.
impl Serialize for Bit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for Bit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = u64::deserialize(deserializer)?;
        match v {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            other => Err(D::Error::custom(format!(
                "bit value must be 0 or 1, got {other}"
            ))),
        }
    }
}
