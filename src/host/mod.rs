pub mod document;
pub mod traits;
