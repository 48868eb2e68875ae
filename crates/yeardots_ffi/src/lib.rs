//! Flutter-facing bindings for the Year Dots core.

pub mod api;
