//! Derived-relation queries over the kintree family graph.
//!
//! Provides the pure relation accessors ([`relations`]: siblings,
//! cousins, grandchildren, in-laws, uncles and aunts) and the
//! relation-label lookup facade ([`lookup`]).

pub mod lookup;
pub mod relations;
