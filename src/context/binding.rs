use crate::session::member::{FunctionDescriptor, PropertyDescriptor};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::fmt;

pub type VariableRegistry<V> = FxHashMap<String, VariableBinding<V>>;
pub type FunctionRegistry = FxHashSet<FunctionBinding>;

/// A variable as it was when the registry was last rebuilt.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableBinding<V> {
    pub name: String,
    pub value: V,
    pub declaration: PropertyDescriptor,
}

impl<V> VariableBinding<V> {
    pub fn new<N: Into<String>>(name: N, value: V, declaration: PropertyDescriptor) -> Self {
        Self {
            name: name.into(),
            value,
            declaration,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.declaration.type_name
    }
}

impl<V: fmt::Display> fmt::Display for VariableBinding<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = if self.declaration.mutable { "var" } else { "val" };
        write!(
            f,
            "{} {}: {} = {}",
            keyword,
            self.name,
            self.type_name(),
            self.value
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionBinding {
    descriptor: FunctionDescriptor,
}

impl FunctionBinding {
    pub fn new(descriptor: FunctionDescriptor) -> Self {
        Self { descriptor }
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    pub fn descriptor(&self) -> &FunctionDescriptor {
        &self.descriptor
    }
}

impl PartialOrd for FunctionBinding {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FunctionBinding {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name()
            .cmp(other.name())
            .then(self.descriptor.id.cmp(&other.descriptor.id))
    }
}

impl fmt::Display for FunctionBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.descriptor.fmt(f)
    }
}

/// Functions of `registry` ordered by name, for listing.
pub fn sorted_functions(registry: &FunctionRegistry) -> Vec<&FunctionBinding> {
    let mut functions: Vec<_> = registry.iter().collect();
    functions.sort();
    functions
}
