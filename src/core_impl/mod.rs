use super::*;

mod buffer_properties;
mod class_info;
mod coercion;
mod encoding;
mod equality_ops;
mod typed_array_views;

pub use class_info::ClassDescription;
pub use encoding::EncodingMode;

pub(crate) use coercion::PrimitiveHint;
