//! Core types for the kintree relationship graph.
//!
//! Provides the family graph data model ([`graph::FamilyGraph`]), the
//! couple/child builder mutations, and the flattened JSON tree document
//! ([`schema`]).

pub mod error;
pub mod graph;
pub mod schema;
