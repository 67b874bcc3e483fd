// Sat Jan 17 2026 - Alex

/// Reinterpret a byte pointer as `*const T`.
///
/// `ptr_cast!(T, ptr)` is `cast_to::<T>(ptr)`; the macro form exists so
/// call sites mirror `ptr_cast_field!`.
#[macro_export]
macro_rules! ptr_cast {
    ($target:ty, $ptr:expr) => {
        $crate::cast::cast_to::<$target>($ptr)
    };
}

#[macro_export]
macro_rules! ptr_cast_mut {
    ($target:ty, $ptr:expr) => {
        $crate::cast::cast_to_mut::<$target>($ptr)
    };
}

/// Reinterpret a byte pointer as `*const Intermediate`, then point at
/// the named field: `ptr_cast_field!(u32, Header, ptr, payload_len)`.
/// The byte offset comes from `core::mem::offset_of!`.
#[macro_export]
macro_rules! ptr_cast_field {
    ($target:ty, $via:ty, $ptr:expr, $field:ident) => {
        $crate::cast::cast_field_to::<$target, $via>(
            $ptr,
            ::core::mem::offset_of!($via, $field),
        )
    };
}

#[macro_export]
macro_rules! ptr_cast_field_mut {
    ($target:ty, $via:ty, $ptr:expr, $field:ident) => {
        $crate::cast::cast_field_to_mut::<$target, $via>(
            $ptr,
            ::core::mem::offset_of!($via, $field),
        )
    };
}
