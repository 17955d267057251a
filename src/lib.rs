#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! A terminal form that collects validated name/location entries into a table.

pub mod cli;
pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod tui;
