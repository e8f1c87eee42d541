//! Common test utilities for note's integration tests.
//!
//! This module provides:
//! - `TestEnv`: isolated home and XDG directories for running the binary
//! - `NotesFixture`: a temporary notes tree plus a session driven by key events

#![allow(dead_code)]

pub mod env;
