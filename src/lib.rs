pub mod catalog;
pub mod compile;
pub mod config;
pub mod error;
pub mod graph;
pub mod resolve;
pub mod validate;
