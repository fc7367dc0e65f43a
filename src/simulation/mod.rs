pub mod eom;
pub mod integrator;
pub mod params;
pub mod scenario;
pub mod states;
