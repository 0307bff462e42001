//! Adapter implementations for the catalog ports

pub mod memory;
