//! Domain layer containing the entities asserted by session tokens.

pub mod entities;

pub use entities::*;
