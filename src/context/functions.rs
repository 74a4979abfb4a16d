use super::binding::{FunctionBinding, FunctionRegistry};
use super::classifier::Classifier;
use super::error::Result;
use crate::session::member::{CallableMember, MethodKey};
use crate::session::unit::CompiledUnit;
use lazy_static::lazy_static;
use rustc_hash::FxHashSet;
use std::rc::Rc;

pub const BASE_OBJECT: &str = "java.lang.Object";
pub const ENTRY_POINT: &str = "main";

lazy_static! {
    /// Methods every compiled unit inherits from the base object.
    pub static ref BASELINE_METHODS: FxHashSet<MethodKey> = {
        let mut methods = FxHashSet::default();
        methods.insert(MethodKey::new(BASE_OBJECT, "equals", &[BASE_OBJECT]));
        methods.insert(MethodKey::new(BASE_OBJECT, "hashCode", &[]));
        methods.insert(MethodKey::new(BASE_OBJECT, "toString", &[]));
        methods.insert(MethodKey::new(BASE_OBJECT, "getClass", &[]));
        methods.insert(MethodKey::new(BASE_OBJECT, "notify", &[]));
        methods.insert(MethodKey::new(BASE_OBJECT, "notifyAll", &[]));
        methods.insert(MethodKey::new(BASE_OBJECT, "wait", &[]));
        methods.insert(MethodKey::new(BASE_OBJECT, "wait", &["long"]));
        methods.insert(MethodKey::new(BASE_OBJECT, "wait", &["long", "int"]));
        methods
    };
}

pub fn is_excluded(member: &CallableMember, classifier: &Classifier) -> bool {
    BASELINE_METHODS.contains(&member.key)
        || member.name() == ENTRY_POINT
        || classifier.is_internal(member.name())
}

/// Clears `registry` and fills it with the user functions every unit exposes.
///
/// Returns how many callables were skipped for lack of a language-level declaration.
pub fn rebuild_functions<U: CompiledUnit>(
    units: &[Rc<U>],
    registry: &mut FunctionRegistry,
    classifier: &Classifier,
) -> Result<usize> {
    registry.clear();
    let mut unresolved = 0;

    for unit in units {
        for member in unit.callable_members()? {
            if is_excluded(&member, classifier) {
                continue;
            }

            match member.function {
                Some(function) => {
                    registry.insert(FunctionBinding::new(function));
                }
                None => {
                    log::trace!("{}.{} has no declaration", unit.class_name(), member.name());
                    unresolved += 1;
                }
            }
        }
    }

    log::trace!("rebuilt {} functions", registry.len());
    Ok(unresolved)
}
