pub mod boundary;
pub mod config;
pub mod error;
pub mod index;
pub mod indicators;
pub mod normalizer;
pub mod regions;
pub mod weights;
// cmd and reports are binary modules (in main.rs).
