#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use optflow_field as field;

#[doc(inline)]
pub use optflow_io as io;
