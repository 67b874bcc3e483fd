// Fri Jan 16 2026 - Alex

use std::fmt;

/// Required alignment of a type, always a power of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alignment {
    value: usize,
}

impl Alignment {
    pub fn new(value: usize) -> Self {
        assert!(value > 0 && value.is_power_of_two());
        Self { value }
    }

    /// Alignment requirement of `T` on the target architecture.
    /// Uses `align_of`, not `size_of`.
    pub fn of<T>() -> Self {
        Self { value: std::mem::align_of::<T>() }
    }

    pub fn as_usize(&self) -> usize {
        self.value
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_primitives() {
        assert_eq!(Alignment::of::<u8>().as_usize(), 1);
        assert_eq!(Alignment::of::<u32>().as_usize(), 4);
        assert_eq!(Alignment::of::<u64>().as_usize(), std::mem::align_of::<u64>());
    }

    #[test]
    #[should_panic]
    fn test_rejects_non_power_of_two() {
        Alignment::new(6);
    }

    #[test]
    fn test_display() {
        assert_eq!(Alignment::new(4).to_string(), "4");
    }
}
