//! CLI infrastructure for the Hexuki policy toolkit
//!
//! This module provides the command-line interface for inspecting trained
//! policy tables and opening books.

pub mod commands;
pub mod config;
pub mod logging;
pub mod output;
