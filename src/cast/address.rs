// Fri Jan 16 2026 - Alex

use std::fmt;
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address {
    value: u64,
}

impl Address {
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    pub fn zero() -> Self {
        Self { value: 0 }
    }

    pub fn from_ptr(ptr: *const u8) -> Self {
        Self { value: ptr as u64 }
    }

    pub fn from_mut_ptr(ptr: *mut u8) -> Self {
        Self { value: ptr as u64 }
    }

    pub fn as_u64(&self) -> u64 {
        self.value
    }

    pub fn as_usize(&self) -> usize {
        self.value as usize
    }

    pub fn is_null(&self) -> bool {
        self.value == 0
    }

    pub fn is_aligned(&self, alignment: usize) -> bool {
        self.value % alignment as u64 == 0
    }

    pub fn offset(&self, offset: usize) -> Self {
        Self { value: self.value.wrapping_add(offset as u64) }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.value)
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.value, f)
    }
}

impl Add<u64> for Address {
    type Output = Self;
    fn add(self, rhs: u64) -> Self::Output {
        Self { value: self.value + rhs }
    }
}

impl From<u64> for Address {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<Address> for u64 {
    fn from(addr: Address) -> Self {
        addr.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_round_trip() {
        let value: u32 = 42;
        let ptr = &value as *const u32 as *const u8;
        assert_eq!(Address::from_ptr(ptr).as_usize(), ptr as usize);
    }

    #[test]
    fn test_null_and_zero() {
        assert!(Address::zero().is_null());
        assert!(!Address::new(0x1000).is_null());
    }

    #[test]
    fn test_alignment_predicate() {
        assert!(Address::new(0x1000).is_aligned(8));
        assert!(Address::new(0x1004).is_aligned(4));
        assert!(!Address::new(0x1001).is_aligned(4));
        assert!(Address::zero().is_aligned(8));
    }

    #[test]
    fn test_offset_arithmetic() {
        assert_eq!(Address::new(0x1001).offset(4), Address::new(0x1005));
        assert_eq!(Address::new(0x1000) + 8, Address::new(0x1008));
    }

    #[test]
    fn test_u64_conversions() {
        assert_eq!(Address::from(0x1000u64).as_u64(), 0x1000);
        assert_eq!(u64::from(Address::new(0x2000)), 0x2000);
    }

    #[test]
    fn test_display_format() {
        assert_eq!(Address::new(0x1005).to_string(), "0x0000000000001005");
        assert_eq!(format!("{:x}", Address::new(0x1005)), "1005");
    }
}
