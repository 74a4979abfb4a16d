//! Recognises members the evaluation strategy introduces on its own.
use crate::session::member::{DataMember, Origin};
use lazy_static::lazy_static;

/// Prefix of the field linking a unit to the implicit receiver.
pub const RECEIVER_LINK_MARKER: &str = "$$implicitReceiver";
/// The link field looked up on the oldest unit.
pub const RECEIVER_LINK_FIELD: &str = "$$implicitReceiver0";
pub const VARIABLE_CACHE_MARKER: &str = "kotlinVars";
pub const SCRIPT_WRAPPER_MARKER: &str = "script$";

lazy_static! {
    static ref DEFAULT: Classifier = Classifier::default();
}

#[derive(Debug, Clone)]
pub struct Classifier {
    markers: Vec<String>,
}

impl Classifier {
    pub fn with_markers<I: Into<String>>(markers: Vec<I>) -> Self {
        Self {
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    pub fn is_internal(&self, name: &str) -> bool {
        self.markers.iter().any(|marker| name.contains(marker.as_str()))
    }

    /// Members tagged synthetic by the interpreter are hidden whatever their name.
    pub fn is_hidden<V>(&self, member: &DataMember<V>) -> bool {
        member.origin == Origin::Synthetic || self.is_internal(&member.name)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::with_markers(vec![
            RECEIVER_LINK_MARKER,
            VARIABLE_CACHE_MARKER,
            SCRIPT_WRAPPER_MARKER,
        ])
    }
}

pub fn is_internal(name: &str) -> bool {
    DEFAULT.is_internal(name)
}
