//! Byte-magnitude units and best-fit conversion for human-readable sizes.
//!
//! Units are binary (1 kb = 1024 b) and rendered with short lowercase names
//! and no separating space, e.g. `"12.34mb"`.

/// A named byte magnitude (e.g. `kb` = 1024 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityUnit {
    pub name: &'static str,
    pub magnitude: u64,
}

pub const BYTE: CapacityUnit = CapacityUnit { name: "b", magnitude: 1 };
pub const KILOBYTE: CapacityUnit = CapacityUnit { name: "kb", magnitude: 1 << 10 };
pub const MEGABYTE: CapacityUnit = CapacityUnit { name: "mb", magnitude: 1 << 20 };
pub const GIGABYTE: CapacityUnit = CapacityUnit { name: "gb", magnitude: 1 << 30 };
pub const TERABYTE: CapacityUnit = CapacityUnit { name: "tb", magnitude: 1 << 40 };

/// Every known unit, smallest first. `BYTE` is the fallback.
pub const CAPACITY_UNITS: [CapacityUnit; 5] = [BYTE, KILOBYTE, MEGABYTE, GIGABYTE, TERABYTE];

/// A byte count expressed in a specific unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertedCapacity {
    pub original_bytes: u64,
    pub unit: CapacityUnit,
    pub converted: f64,
}

impl ConvertedCapacity {
    pub fn new(original_bytes: u64, unit: CapacityUnit) -> Self {
        Self {
            original_bytes,
            unit,
            converted: original_bytes as f64 / unit.magnitude as f64,
        }
    }

    /// Same byte count, always in bytes.
    pub fn in_bytes(original_bytes: u64) -> Self {
        Self::new(original_bytes, BYTE)
    }

    /// Value rounded to `decimals` places followed by the unit name (`"1.5kb"`).
    pub fn to_human_string(&self, decimals: usize) -> String {
        format!("{}{}", format_rounded(self.converted, decimals), self.unit.name)
    }

    /// The original byte count rendered in the byte unit (`"1536.0b"`).
    pub fn to_bytes_string(&self, decimals: usize) -> String {
        Self::in_bytes(self.original_bytes).to_human_string(decimals)
    }
}

/// Picks the largest unit whose magnitude is strictly below `byte_count + offset`
/// (falls back to bytes) and converts `byte_count` into it.
pub fn best_fit_unit(byte_count: u64, offset: i64) -> ConvertedCapacity {
    let measured = i128::from(byte_count) + i128::from(offset);
    let mut unit = BYTE;
    for candidate in CAPACITY_UNITS {
        let magnitude = i128::from(candidate.magnitude);
        if measured > magnitude && candidate.magnitude > unit.magnitude {
            unit = candidate;
        }
    }
    ConvertedCapacity::new(byte_count, unit)
}

/// Rounds half away from zero to `decimals` places; keeps at least one
/// fractional digit and trims the rest of the trailing zeros ("1.0", "12.5", "3.14").
fn format_rounded(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals.min(15) as i32);
    let rounded = (value * scale).round() / scale;
    let mut s = format!("{:.*}", decimals, rounded);
    if let Some(dot) = s.find('.') {
        let min_len = dot + 2;
        while s.len() > min_len && s.ends_with('0') {
            s.pop();
        }
    } else {
        s.push_str(".0");
    }
    s
}
