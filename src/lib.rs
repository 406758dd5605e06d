//! Embodi CMS - content collection extraction for Astro-style projects
//!
//! Embodi statically reads the `defineCollection` definitions of a content
//! configuration module (without executing it), pairs each exported glob
//! collection with its precomputed JSON Schema, and writes a flat CMS
//! configuration document.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (`generate`, `inspect`, `init`)
//! - `config`: Configuration file loading and parsing
//! - `core`: Syntax tree, extraction passes, schema transforms and generation
//! - `json_writer`: Pretty JSON output
//! - `logging`: tracing subscriber setup

pub mod cli;
pub mod config;
pub mod core;
pub mod json_writer;
pub mod logging;
