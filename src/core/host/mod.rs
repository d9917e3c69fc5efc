//! Host requirements: identifier formats and the canonical path space under
//! which provable state is keyed on every chain.

pub mod error;
pub mod identifier;
pub mod path;
pub mod validate;
