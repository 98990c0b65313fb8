//! Dissonance Predictor - Interactive cognitive dissonance calculator
//!
//! This crate evaluates a three-way interaction model of political cognitive
//! dissonance for user-selected dilemma conditions and serves the result as a
//! small web calculator.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
