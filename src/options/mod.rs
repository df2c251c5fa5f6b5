pub mod options_model;
pub mod process;
pub mod resolve;
