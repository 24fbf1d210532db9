//! # Shortlist Architecture
//!
//! Shortlist is an **in-memory candidate screening library**. Callers describe
//! who they are looking for as composable boolean specifications, then run a
//! candidate pool through a filter that knows nothing about the concrete
//! predicates it evaluates.
//!
//! ## The Two Abstractions
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Specification layer (spec/)                                │
//! │  - One capability: is_satisfied(&item) -> bool              │
//! │  - Leaf predicates test a single attribute                  │
//! │  - Composites (and/or/not) combine other specifications     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Filter layer (filter.rs)                                   │
//! │  - Stateless single pass over a borrowed slice              │
//! │  - Returns matching items in input order                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The split is the extension contract: a new predicate or a new combinator
//! is a new type implementing [`spec::Specification`], and the filter layer
//! is untouched by it. The filter never grows a method per criterion.
//!
//! ## Key Principle: No I/O Assumptions
//!
//! Everything here operates on plain Rust values and returns plain Rust
//! values. Nothing writes to stdout, touches the filesystem, or assumes a
//! particular front end. A client that wants to persist or print a filtered
//! pool serializes the returned references itself (the model types derive
//! `Serialize` for exactly that reason).
//!
//! ## Module Overview
//!
//! - [`spec`]: The specification abstraction, composites, and the leaf
//!   predicates for the candidate model
//! - [`filter`]: The filter capability and its linear-scan implementation
//! - [`model`]: Core data types (`Candidate`, `Skill`, `Education`)
//! - [`error`]: Error types

pub mod error;
pub mod filter;
pub mod model;
pub mod spec;
