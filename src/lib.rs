//! TxnForge - Synthetic HTTP transaction session generator
//!
//! Produces JSON session fixtures for test harnesses that replay canned
//! HTTP traffic.

#![deny(unsafe_code)]
#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::cargo)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::multiple_crate_versions
)]

pub mod error;
pub mod fixture;
pub mod generator;

pub use error::{Result, TxnForgeError};
