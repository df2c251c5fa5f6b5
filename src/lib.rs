//! Snapshot the values of a form's input controls as plain data.
//!
//! The host UI toolkit is reached through [`ControlHost`]; the crate ships an
//! in-memory [`Document`] host for tests and the command line.

pub mod cli;
pub mod collect;
pub mod control;
pub mod host;
pub mod options;

pub use collect::collector::{Collector, collect_values};
pub use collect::error::CollectError;
pub use control::control_model::{ControlDescriptor, ControlKind, FieldValue, ResultMap};
pub use host::document::{Document, DocumentError, Element, NodeRef};
pub use host::traits::ControlHost;
pub use options::options_model::{CollectOptions, Selector};
pub use options::process::{
    default_process_options, reset_default_process_options, set_default_process_options,
};
pub use options::resolve::{Configuration, FieldSet};
