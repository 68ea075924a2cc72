// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod enrich;

pub mod consolidate;
pub mod csv;
pub mod file;
pub mod gui;
pub mod progress;
pub mod records;
pub mod runner;
pub mod stats;
pub mod store;
