//! A map with set-like uniqueness on both keys and values, queryable in
//! both directions.
//!
//! `BiMap` keeps a forward (key to value) and a reverse (value to key)
//! mapping permanently in sync. Inserting a pair first evicts whatever
//! entry would collide with its key or its value on either side, so the
//! stored relation is one-to-one at every observable point. Lookups,
//! probes and removals exist symmetrically for both directions, and
//! iteration follows the forward insertion order.
//!
//! The `MapLike` trait captures the operations of a plain one-directional
//! map and `BiMapLike` the value-side additions; code written against the
//! plain contract accepts a `BiMap` unchanged.

extern crate indexmap;

pub mod iter;
pub mod map;
pub mod map_like;

pub use iter::{IntoIter, Iter, Keys, Values};
pub use map::BiMap;
pub use map_like::{BiMapLike, MapLike};
