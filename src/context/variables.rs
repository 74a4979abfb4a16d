use super::binding::{VariableBinding, VariableRegistry};
use super::classifier::Classifier;
use super::error::{reflective_access, Result};
use super::receiver::resolve_receiver;
use super::settings::{Setting, Settings};
use crate::session::member::{DataMember, MemberValue};
use crate::session::unit::CompiledUnit;
use std::collections::hash_map::Entry;
use std::rc::Rc;

/// Clears `registry` and fills it from the receiver of the oldest unit and then
/// from every unit's own members, in execution order.
///
/// By default the first binding seen for a name is kept, so receiver state shadows
/// unit declarations and earlier units shadow later ones. With
/// [`Setting::LastDeclarationWins`] the walk order is kept but later bindings replace
/// earlier ones, and the receiver layers are walked root first.
pub fn rebuild_variables<U: CompiledUnit>(
    units: &[Rc<U>],
    registry: &mut VariableRegistry<U::Value>,
    classifier: &Classifier,
    settings: &Settings,
) -> Result<()> {
    registry.clear();

    let oldest = match units.first() {
        Some(unit) => unit,
        None => return Ok(()),
    };

    let mut collector = Collector {
        registry,
        classifier,
        replace: settings.is_enabled(&Setting::LastDeclarationWins),
    };

    if let Some(receiver) = resolve_receiver(oldest.as_ref(), settings)? {
        let layers = receiver.layers();

        if collector.replace {
            for layer in layers.iter().rev() {
                collector.collect(&layer.owner, &layer.members)?;
            }
        } else {
            for layer in layers {
                collector.collect(&layer.owner, &layer.members)?;
            }
        }
    }

    for unit in units {
        let members = unit.declared_members()?;
        collector.collect(unit.class_name(), &members)?;
    }

    log::trace!("rebuilt {} variables", collector.registry.len());
    Ok(())
}

struct Collector<'a, V> {
    registry: &'a mut VariableRegistry<V>,
    classifier: &'a Classifier,
    replace: bool,
}

impl<'a, V: Clone> Collector<'a, V> {
    fn collect(&mut self, owner: &str, members: &[DataMember<V>]) -> Result<()> {
        for member in members {
            if self.classifier.is_hidden(member) {
                continue;
            }

            // no language-level property behind it
            let declaration = match &member.declaration {
                Some(declaration) => declaration,
                None => continue,
            };

            let value = match &member.value {
                MemberValue::Readable(value) => value,
                MemberValue::Inaccessible(reason) => {
                    return Err(reflective_access(owner, &member.name, reason.as_str()))
                }
            };

            let binding = VariableBinding::new(member.name.clone(), value.clone(), declaration.clone());

            match self.registry.entry(member.name.clone()) {
                Entry::Occupied(mut entry) if self.replace => {
                    entry.insert(binding);
                }
                Entry::Occupied(_) => {
                    log::trace!("{}.{} is shadowed", owner, member.name);
                }
                Entry::Vacant(entry) => {
                    entry.insert(binding);
                }
            }
        }

        Ok(())
    }
}
