//! Test utilities for Pivot development.
//!
//! [`fixtures`] builds standard and random lattices; [`oracle`] answers
//! connectivity questions by brute force, independently of the
//! engine's own adjacency and cut-vertex code.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod oracle;
