//! Construction of (k,s) tuple graphs.
//!
//! A k-tuple of vertices of a base graph is valid if the subgraph it induces has at most s connected components.
//! Valid tuples are the vertices of the tuple graph, colored by their atomic type. Two tuples differing in exactly
//! one coordinate i, the new vertex being a neighbour (in the base graph) of the old one, are joined by an edge labeled i+1.
//!
//! Tuples can be enumerated naively (all n^k tuples then filtering) or by growing connected multisets, see [params::Enumeration].

pub mod atomic;

pub mod params;

pub mod naive;

pub mod multiset;

pub mod builder;
