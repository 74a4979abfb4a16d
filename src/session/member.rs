use std::fmt;
use std::hash::{Hash, Hasher};

/// Who introduced a member into a compiled unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    User,
    Synthetic,
    /// The interpreter doesn't know; classification falls back to the member's name.
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyDescriptor {
    pub name: String,
    pub type_name: String,
    pub mutable: bool,
}

impl PropertyDescriptor {
    pub fn new<N: Into<String>, T: Into<String>>(name: N, type_name: T, mutable: bool) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            mutable,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MemberValue<V> {
    Readable(V),
    Inaccessible(String),
}

/// A data member declared on a compiled unit or on one layer of the receiver.
#[derive(Debug, Clone)]
pub struct DataMember<V> {
    pub name: String,
    pub origin: Origin,
    pub value: MemberValue<V>,
    pub declaration: Option<PropertyDescriptor>,
}

impl<V> DataMember<V> {
    pub fn new<N: Into<String>>(
        name: N,
        origin: Origin,
        value: MemberValue<V>,
        declaration: Option<PropertyDescriptor>,
    ) -> Self {
        Self {
            name: name.into(),
            origin,
            value,
            declaration,
        }
    }

    /// A user declared `val`/`var` with a readable value.
    pub fn user<N: Into<String>, T: Into<String>>(name: N, type_name: T, value: V) -> Self {
        let name = name.into();
        let declaration = PropertyDescriptor::new(name.clone(), type_name, false);
        Self::new(name, Origin::User, MemberValue::Readable(value), Some(declaration))
    }

    pub fn synthetic<N: Into<String>>(name: N, value: V) -> Self {
        Self::new(name, Origin::Synthetic, MemberValue::Readable(value), None)
    }

    pub fn is_readable(&self) -> bool {
        matches!(self.value, MemberValue::Readable(_))
    }
}

/// Identifies a callable member the way the runtime does: by declaring owner,
/// name and parameter types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodKey {
    pub owner: String,
    pub name: String,
    pub parameters: Vec<String>,
}

impl MethodKey {
    pub fn new<O: Into<String>, N: Into<String>>(owner: O, name: N, parameters: &[&str]) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            parameters: parameters.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclarationId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    pub name: String,
    pub type_name: String,
}

impl Parameter {
    pub fn new<N: Into<String>, T: Into<String>>(name: N, type_name: T) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// The language-level declaration behind a callable member.
///
/// Two descriptors are the same function iff they share a [`DeclarationId`], no matter
/// how many compiled units re-expose it.
#[derive(Debug, Clone)]
pub struct FunctionDescriptor {
    pub id: DeclarationId,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: String,
}

impl FunctionDescriptor {
    pub fn new<N: Into<String>, R: Into<String>>(
        id: DeclarationId,
        name: N,
        parameters: Vec<Parameter>,
        return_type: R,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            parameters,
            return_type: return_type.into(),
        }
    }
}

impl PartialEq for FunctionDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FunctionDescriptor {}

impl Hash for FunctionDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl fmt::Display for FunctionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self
            .parameters
            .iter()
            .map(|p| format!("{}: {}", p.name, p.type_name))
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "fun {}({}): {}", self.name, params, self.return_type)
    }
}

/// A member a compiled unit exposes for calling. `function` is `None` when the
/// member has no language-level declaration, e.g. a compiler generated accessor.
#[derive(Debug, Clone)]
pub struct CallableMember {
    pub key: MethodKey,
    pub function: Option<FunctionDescriptor>,
}

impl CallableMember {
    pub fn new(key: MethodKey, function: Option<FunctionDescriptor>) -> Self {
        Self { key, function }
    }

    pub fn name(&self) -> &str {
        &self.key.name
    }
}
