use std::collections::HashSet;

use tracing::{debug, trace};

use crate::collect::coerce::{checkbox_value, checked_values, coerce_int, first_checked, text_value};
use crate::collect::error::CollectError;
use crate::collect::name::{FieldName, raw_name, resolve_name};
use crate::control::control_model::{ControlDescriptor, ControlKind, FieldValue, ResultMap};
use crate::host::traits::ControlHost;
use crate::options::options_model::CollectOptions;
use crate::options::process::default_process_options;
use crate::options::resolve::Configuration;

/// Collect the current values of the controls in `containers`.
///
/// `options` are layered over the process-wide defaults, which are layered
/// over the built-ins. Fails only on an invalid `nameStripRegex`.
pub fn collect_values<H: ControlHost>(
    host: &mut H,
    containers: &[H::Node],
    options: Option<&CollectOptions>,
) -> Result<ResultMap, CollectError> {
    let config = Configuration::resolve(&default_process_options(), options)?;
    Ok(Collector::new(config).collect(host, containers))
}

/// A collector bound to one resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct Collector {
    config: Configuration,
}

impl Collector {
    pub fn new(config: Configuration) -> Self {
        Collector { config }
    }

    /// Build from a single options layer, ignoring process-wide defaults.
    pub fn from_options(options: CollectOptions) -> Result<Self, CollectError> {
        Ok(Collector::new(Configuration::from_options(options)?))
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Walk every container and build one result map.
    ///
    /// Starts from a copy of the configured defaults. Containers are visited
    /// in the order given and controls in document order; the first control
    /// to produce a name owns it for the rest of the call.
    pub fn collect<H: ControlHost>(&self, host: &mut H, containers: &[H::Node]) -> ResultMap {
        let mut data = self.config.defaults.clone();
        let mut written: HashSet<String> = HashSet::new();

        for container in containers {
            let nodes = if host.is_control(container) {
                vec![container.clone()]
            } else {
                host.find_controls(container, &self.config.selector)
            };
            let controls: Vec<ControlDescriptor> = nodes.iter().map(|n| host.describe(n)).collect();

            debug!(controls = controls.len(), "collecting container");

            for (node, control) in nodes.iter().zip(&controls) {
                let Some(field) = resolve_name(control, &self.config) else {
                    debug!(
                        kind = ?control.kind,
                        raw_name = raw_name(control),
                        "control has no usable name, skipped"
                    );
                    continue;
                };

                if self.config.skip.contains(&field.lower) {
                    debug!(field = %field.key, "field in skip list");
                    continue;
                }

                if written.contains(&field.key) {
                    trace!(field = %field.key, "field already collected");
                    continue;
                }

                let mut value = self.extract(host, node, control, &field, &controls);
                if self.config.int_fields.contains(&field.lower) {
                    value = coerce_int(value);
                }

                trace!(field = %field.key, value = ?value, "collected");
                written.insert(field.key.clone());
                data.insert(field.key, value);
            }
        }

        data
    }

    fn extract<H: ControlHost>(
        &self,
        host: &mut H,
        node: &H::Node,
        control: &ControlDescriptor,
        field: &FieldName,
        siblings: &[ControlDescriptor],
    ) -> FieldValue {
        match control.kind {
            ControlKind::Radio => {
                first_checked(group_of(control, siblings, |m| m.name_attr() == control.name_attr()))
            }
            ControlKind::Checkbox if self.config.multi_checkboxes.contains(&field.lower) => {
                let group = group_of(control, siblings, |m| {
                    m.kind == ControlKind::Checkbox && m.name_attr() == control.name_attr()
                });
                checked_values(group, self.config.int_fields.contains(&field.lower))
            }
            ControlKind::Checkbox => {
                checkbox_value(control, self.config.value_checkboxes.contains(&field.lower))
            }
            _ => {
                let trim = !self.config.no_trim_fields.contains(&field.lower);
                let (value, write_back) = text_value(host.display_value(node), trim);
                if let Some(trimmed) = write_back {
                    trace!(field = %field.key, "writing trimmed value back");
                    host.set_display_value(node, &trimmed);
                }
                value
            }
        }
    }
}

/// Members of `control`'s group among `siblings`, in document order.
///
/// A control without a `name` attribute is a group of one.
fn group_of<'a>(
    control: &'a ControlDescriptor,
    siblings: &'a [ControlDescriptor],
    same_group: impl Fn(&ControlDescriptor) -> bool,
) -> Vec<&'a ControlDescriptor> {
    if control.name_attr().is_none() {
        return vec![control];
    }
    siblings.iter().filter(|&m| same_group(m)).collect()
}
