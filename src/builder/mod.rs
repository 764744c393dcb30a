//! Build orchestration and coordination.
//!
//! This module provides the [`JarBuilder`] orchestrator that turns resolved
//! [`BuildOptions`](crate::options::BuildOptions) into a Maven run and a
//! delivered uberjar.
//!
//! # Overview
//!
//! The builder:
//! 1. Reads the project version from `pom.xml`
//! 2. Assembles the [`BuildCommand`]
//! 3. Prints it (`--show_build_command`) or runs it
//! 4. Copies the produced jar to the target path
//! 5. Copies it again into `python/tests` when that directory exists
//!
//! # Module Organization
//!
//! - [`artifact`] - Artifact naming and delivery
//! - [`checksum`] - SHA256 of the delivered jar
//! - [`command`] - Maven command line assembly
//! - [`orchestrator`] - Main [`JarBuilder`] pipeline
//! - [`runner`] - Child process execution
//! - [`tool_detection`] - Maven wrapper lookup

pub mod artifact;
pub mod checksum;
pub mod command;
mod orchestrator;
pub mod runner;
pub mod tool_detection;

pub use command::BuildCommand;
pub use orchestrator::{BuildOutcome, JarBuilder};
