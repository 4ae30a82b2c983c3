//! HTTP transport: the SVG endpoint and its response shaping.

pub mod svg;
