use crate::control::control_model::ControlDescriptor;
use crate::options::options_model::Selector;

/// What the collector needs from the UI toolkit that owns the controls.
///
/// `Node` is a handle into the host's tree. The collector never builds
/// nodes itself; it only passes back handles the host gave it.
pub trait ControlHost {
    type Node: Clone;

    /// Whether `node` is itself an input control.
    fn is_control(&self, node: &Self::Node) -> bool;

    /// Descendant controls of `container` matching `selector`, in document
    /// order.
    fn find_controls(&self, container: &Self::Node, selector: &Selector) -> Vec<Self::Node>;

    /// Read-only snapshot of a control's attributes and state.
    fn describe(&self, control: &Self::Node) -> ControlDescriptor;

    /// Value currently shown by a control.
    fn display_value(&self, control: &Self::Node) -> String;

    /// Replace the value shown by a control.
    fn set_display_value(&mut self, control: &Self::Node, value: &str);
}
