use super::member::{
    CallableMember, DataMember, FunctionDescriptor, MemberValue, MethodKey, Origin, PropertyDescriptor,
};
use crate::context::error::Result;
use std::rc::Rc;

/// One class in the receiver's ancestry together with the members it declares itself.
#[derive(Debug, Clone)]
pub struct DeclarationLayer<V> {
    pub owner: String,
    pub members: Vec<DataMember<V>>,
}

impl<V> DeclarationLayer<V> {
    pub fn new<O: Into<String>>(owner: O, members: Vec<DataMember<V>>) -> Self {
        Self {
            owner: owner.into(),
            members,
        }
    }
}

/// The implicit receiver shared by every unit of a session.
///
/// Layers are ordered most derived first; the last layer is the root of the chain.
#[derive(Debug, Clone)]
pub struct Receiver<V> {
    layers: Vec<DeclarationLayer<V>>,
}

impl<V> Receiver<V> {
    pub fn new(layers: Vec<DeclarationLayer<V>>) -> Self {
        Self { layers }
    }

    pub fn layers(&self) -> &[DeclarationLayer<V>] {
        &self.layers
    }

    pub fn members(&self) -> impl Iterator<Item = &DataMember<V>> {
        self.layers.iter().flat_map(|layer| layer.members.iter())
    }
}

#[derive(Debug, Clone)]
pub enum ReceiverLink<V> {
    Linked(Rc<Receiver<V>>),
    /// The link field exists but holds nothing yet.
    Unset,
    NoSuchField,
}

/// An evaluated unit as seen through the interpreter.
///
/// Implementations backed by runtime introspection report lookup failures as
/// [`crate::context::error::Error::ReflectiveAccess`].
pub trait CompiledUnit {
    type Value: Clone;

    fn class_name(&self) -> &str;

    /// Data members declared on this unit itself, never inherited ones.
    fn declared_members(&self) -> Result<Vec<DataMember<Self::Value>>>;

    fn callable_members(&self) -> Result<Vec<CallableMember>>;

    /// Dereferences the receiver link field named exactly `field`.
    fn receiver_link(&self, field: &str) -> Result<ReceiverLink<Self::Value>>;
}

/// A compiled unit whose metadata was reported by the interpreter directly.
#[derive(Debug, Clone)]
pub struct ScriptUnit<V> {
    class_name: String,
    members: Vec<DataMember<V>>,
    callables: Vec<CallableMember>,
    link: Option<(String, Option<Rc<Receiver<V>>>)>,
}

impl<V: Clone> ScriptUnit<V> {
    pub fn new<N: Into<String>>(class_name: N) -> Self {
        Self {
            class_name: class_name.into(),
            members: vec![],
            callables: vec![],
            link: None,
        }
    }

    pub fn declare<N: Into<String>, T: Into<String>>(
        mut self,
        name: N,
        type_name: T,
        value: V,
    ) -> Self {
        self.members.push(DataMember::user(name, type_name, value));
        self
    }

    pub fn synthetic<N: Into<String>>(mut self, name: N, value: V) -> Self {
        self.members.push(DataMember::synthetic(name, value));
        self
    }

    pub fn inaccessible<N: Into<String>, T: Into<String>>(mut self, name: N, type_name: T) -> Self {
        let name = name.into();
        let reason = format!("{} is not accessible", name);
        let declaration = PropertyDescriptor::new(name.clone(), type_name, false);

        self.members.push(DataMember::new(
            name,
            Origin::User,
            MemberValue::Inaccessible(reason),
            Some(declaration),
        ));
        self
    }

    pub fn member(mut self, member: DataMember<V>) -> Self {
        self.members.push(member);
        self
    }

    /// Exposes a callable. Pass `None` for members without a language-level declaration.
    pub fn expose(mut self, key: MethodKey, function: Option<FunctionDescriptor>) -> Self {
        self.callables.push(CallableMember::new(key, function));
        self
    }

    pub fn link_receiver<F: Into<String>>(mut self, field: F, receiver: Rc<Receiver<V>>) -> Self {
        self.link = Some((field.into(), Some(receiver)));
        self
    }

    pub fn unset_receiver<F: Into<String>>(mut self, field: F) -> Self {
        self.link = Some((field.into(), None));
        self
    }
}

impl<V: Clone> CompiledUnit for ScriptUnit<V> {
    type Value = V;

    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn declared_members(&self) -> Result<Vec<DataMember<V>>> {
        Ok(self.members.clone())
    }

    fn callable_members(&self) -> Result<Vec<CallableMember>> {
        Ok(self.callables.clone())
    }

    fn receiver_link(&self, field: &str) -> Result<ReceiverLink<V>> {
        let link = match &self.link {
            Some((name, Some(receiver))) if name == field => ReceiverLink::Linked(receiver.clone()),
            Some((name, None)) if name == field => ReceiverLink::Unset,
            _ => ReceiverLink::NoSuchField,
        };

        Ok(link)
    }
}
