//! Map configuration, entities and the ASCII grid renderer

pub mod cli;
pub mod config;
pub mod coord;
pub mod entity;
pub mod error;
pub mod input;
pub mod map;
