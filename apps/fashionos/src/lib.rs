//! # FashionOS
//!
//! Application layer of the FashionOS atelier: the HTTP API, the CLI, the
//! wizard session registry and the submission gateway. All domain rules live
//! in `fashionos-core`; this crate only wires them to the outside world.

pub mod api;
pub mod cli;
pub mod config;
pub mod sessions;
pub mod submission;
