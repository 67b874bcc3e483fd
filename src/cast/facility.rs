// Sat Jan 17 2026 - Alex

use std::any::type_name;
use std::panic::Location;

use crate::cast::{Address, Alignment};
use crate::diagnostics::{self, Severity};

/// Route every reinterpretation through an untyped pointer stage.
pub const CAST_VIA_VOID: bool = cfg!(feature = "cast-via-void");

/// Check every produced address against the target type's alignment.
pub const CHECK_CAST_ALIGN: bool = cfg!(feature = "check-cast-align");

#[inline(always)]
fn reinterpret<T>(ptr: *const u8) -> *const T {
    if CAST_VIA_VOID {
        ptr.cast::<()>().cast::<T>()
    } else {
        ptr.cast::<T>()
    }
}

#[inline(always)]
fn reinterpret_mut<T>(ptr: *mut u8) -> *mut T {
    if CAST_VIA_VOID {
        ptr.cast::<()>().cast::<T>()
    } else {
        ptr.cast::<T>()
    }
}

/// Advisory only: reports through the diagnostic sink and returns.
/// Address 0 satisfies every power-of-two alignment, so null never
/// reports.
#[inline]
fn check_alignment<T>(addr: Address, site: &Location<'_>) {
    if !CHECK_CAST_ALIGN {
        return;
    }
    let required = Alignment::of::<T>();
    if !addr.is_aligned(required.as_usize()) {
        diagnostics::report(
            Severity::Info,
            &format!(
                "Alignment error - (*const {}) at {} - alignment {}, address {}",
                type_name::<T>(),
                site,
                required,
                addr
            ),
        );
    }
}

/// Reinterpret `ptr` as a pointer to `T`. The returned pointer carries
/// the same address; null passes through unchanged.
#[track_caller]
pub fn cast_to<T>(ptr: *const u8) -> *const T {
    check_alignment::<T>(Address::from_ptr(ptr), Location::caller());
    reinterpret(ptr)
}

#[track_caller]
pub fn cast_to_mut<T>(ptr: *mut u8) -> *mut T {
    check_alignment::<T>(Address::from_mut_ptr(ptr), Location::caller());
    reinterpret_mut(ptr)
}

/// Reinterpret `ptr` as a pointer to `I`, then produce a pointer to the
/// field of type `T` at `field_offset` bytes within it. Checks run in
/// two stages when enabled: the base address against `I`'s alignment,
/// the field address against `T`'s. The pointer may be aligned for `I`
/// yet land on a misaligned field, or vice versa, so neither check
/// subsumes the other.
#[track_caller]
pub fn cast_field_to<T, I>(ptr: *const u8, field_offset: usize) -> *const T {
    let site = Location::caller();
    check_alignment::<I>(Address::from_ptr(ptr), site);
    let field = ptr.wrapping_add(field_offset);
    check_alignment::<T>(Address::from_ptr(field), site);
    reinterpret(field)
}

#[track_caller]
pub fn cast_field_to_mut<T, I>(ptr: *mut u8, field_offset: usize) -> *mut T {
    let site = Location::caller();
    check_alignment::<I>(Address::from_mut_ptr(ptr), site);
    let field = ptr.wrapping_add(field_offset);
    check_alignment::<T>(Address::from_mut_ptr(field), site);
    reinterpret_mut(field)
}

/// Erase the pointee type without naming a target, for assignment
/// contexts. No alignment check: an untyped pointer has no requirement.
pub fn erase(ptr: *const u8) -> *const () {
    reinterpret(ptr)
}

pub fn erase_mut(ptr: *mut u8) -> *mut () {
    reinterpret_mut(ptr)
}
