pub mod coordinates;
pub mod energy;
