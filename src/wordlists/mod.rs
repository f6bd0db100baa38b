//! Word pools
//!
//! Loading and decoding of candidate pools. The engine itself only ever sees
//! validated [`crate::core::Word`] values; the storage encoding stops here.

pub mod codec;
pub mod loader;
