//! Circpack Core Types
//!
//! This crate provides the value types shared by the circpack packing engine
//! and its collaborators:
//!
//! - **Geometry**: [`geometry::Point`] and the packing [`geometry::Region`]
//! - **Circles**: the immutable [`circle::Circle`] value plus the
//!   [`circle::overlaps`] and [`circle::exits_region`] predicates
//!
//! Nothing in this crate draws random numbers or performs I/O.

pub mod circle;
pub mod geometry;
