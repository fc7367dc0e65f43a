pub mod analysis;
pub mod benchmark;
pub mod configuration;
pub mod error;
pub mod simulation;

pub use simulation::states::{NVec2, StateVec, StateVec1, StateVec2, StateVec3, Trajectory};
pub use simulation::params::{SimParameters, G_STANDARD};
pub use simulation::eom::{DoublePendulum, EquationsOfMotion, SimplePendulum, TriplePendulum};
pub use simulation::integrator::rk4_integrate;
pub use simulation::scenario::{PendulumSystem, Scenario, SimulationResult};

pub use analysis::coordinates::{to_cartesian, CartesianSeries};
pub use analysis::energy::{double_energy, simple_energy, triple_energy, EnergySeries};

pub use configuration::config::{ParametersConfig, ScenarioConfig, SegmentConfig};

pub use error::SimError;

pub use benchmark::benchmark::{bench_eom, bench_rk4};
