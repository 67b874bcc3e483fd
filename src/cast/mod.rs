// Fri Jan 16 2026 - Alex

pub mod address;
pub mod alignment;
pub mod facility;

mod macros;

pub use address::Address;
pub use alignment::Alignment;
pub use facility::{
    cast_field_to, cast_field_to_mut, cast_to, cast_to_mut, erase, erase_mut, CAST_VIA_VOID,
    CHECK_CAST_ALIGN,
};
