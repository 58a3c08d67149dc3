//! All utilities related to building the demo's GPU geometry.

pub mod geometry;
