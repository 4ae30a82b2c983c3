//! Top-level facade crate for steamstatus.
//!
//! Re-exports the core extraction/rendering types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use steamstatus_core::*;
}

pub mod gateway {
    pub use steamstatus_gateway::*;
}
