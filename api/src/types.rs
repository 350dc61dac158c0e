use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Token amounts in base units (18 decimals).
pub type Amount = u128;

/// Puzzle proof values and targets.
pub type ProofValue = u128;

pub const ADDRESS_LEN: usize = 20;

/// An account identifier. Key derivation happens elsewhere; the engine only compares addresses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(pub [u8; ADDRESS_LEN]);

impl Address {
    pub const ZERO: Address = Address([0u8; ADDRESS_LEN]);

    /// Builds the address whose trailing bytes encode `n`, e.g. `0x…0001` for 1.
    pub const fn from_low_u64(n: u64) -> Self {
        let bytes = n.to_be_bytes();
        let mut out = [0u8; ADDRESS_LEN];
        let mut i = 0;
        while i < 8 {
            out[ADDRESS_LEN - 8 + i] = bytes[i];
            i += 1;
        }
        Address(out)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        for b in self.0.iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid address: {0}")]
pub struct ParseAddressError(pub String);

impl FromStr for Address {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix("0x").unwrap_or(s);
        if hex.len() != ADDRESS_LEN * 2 || !hex.is_ascii() {
            return Err(ParseAddressError(s.to_string()));
        }

        let mut out = [0u8; ADDRESS_LEN];
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|_| ParseAddressError(s.to_string()))?;
        }
        Ok(Address(out))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Logical clock reading supplied by the host ledger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    pub height: u64,
    pub unix_timestamp: i64,
}

impl Clock {
    pub fn new(height: u64, unix_timestamp: i64) -> Self {
        Self { height, unix_timestamp }
    }
}
