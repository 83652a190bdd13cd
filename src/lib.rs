// src/lib.rs
pub mod args;
pub mod banner;
pub mod client;
pub mod errors;
pub mod models;
pub mod persist;
pub mod runner;
