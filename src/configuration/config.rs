//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! pendulum scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – integration window, step count, gravity
//! - [`SegmentConfig`]    – mass, rod length and initial conditions per segment
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example double-pendulum scenario matching these types:
//!
//! ```yaml
//! parameters:
//!   t_start: 0.0          # integration start time, s
//!   t_end: 10.0           # integration end time, s
//!   n_steps: 1000         # number of fixed RK4 steps
//!   g: 9.81               # optional, defaults to 9.81 m/s^2
//!
//! segments:               # 1, 2 or 3 entries; topology = entry count
//!   - m: 1.0              # point mass, kg
//!     l: 1.0              # rod length, m
//!     theta0: 135.0       # initial angle from downward vertical, degrees
//!     omega0: 0.0         # initial angular velocity, degrees/s
//!   - m: 1.0
//!     l: 1.0
//!     theta0: 135.0
//!     omega0: 0.0
//! ```
//!
//! Angles are given in degrees here and converted to radians when the
//! runtime scenario is built.

use serde::Deserialize;

use crate::simulation::params::G_STANDARD;

/// Integration window and physical constants for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_start: f64,  // integration start time
    pub t_end: f64,    // integration end time
    pub n_steps: usize, // number of fixed RK4 steps
    #[serde(default = "default_g")]
    pub g: f64, // gravitational acceleration
}

fn default_g() -> f64 {
    G_STANDARD
}

/// Configuration for a single chain segment: its point mass, rod length and
/// initial state
#[derive(Deserialize, Debug, Clone)]
pub struct SegmentConfig {
    pub m: f64,      // point mass at the rod tip
    pub l: f64,      // rod length
    pub theta0: f64, // initial angle from downward vertical, degrees
    pub omega0: f64, // initial angular velocity, degrees per second
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // integration window and constants
    pub segments: Vec<SegmentConfig>, // chain segments, pivot first
}
