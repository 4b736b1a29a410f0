//! Essence: pure, synchronous text normalization, identifier generation,
//! fuzzy scoring, and generic blocking/resolution logic shared by every
//! entity-resolution domain. Accident: snapshot I/O, configuration, and the
//! CLI — each lives in its own crate.

pub mod blocking;
pub mod id;
pub mod normalize;
pub mod record;
pub mod resolver;
pub mod wratio;
