pub mod classifier;
pub mod control_model;
