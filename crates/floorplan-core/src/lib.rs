//! Floorplan Core Types and Definitions
//!
//! This crate provides the foundational types shared by the floor plan
//! layout engines and renderers:
//!
//! - **Identifiers**: String-interned room identifiers ([`identifier::Id`])
//! - **Colors**: CSS color parsing for rendering ([`color::Color`])
//! - **Geometry**: Points, sizes and rectangles ([`geometry`] module)

pub mod color;
pub mod geometry;
pub mod identifier;
