use super::classifier::RECEIVER_LINK_FIELD;
use super::error::{missing_receiver, Result};
use super::settings::{Setting, Settings};
use crate::session::unit::{CompiledUnit, Receiver, ReceiverLink};
use std::rc::Rc;

/// Follows the receiver link on the oldest unit of a session.
///
/// An unset link means nothing was evaluated against the receiver yet. A unit without
/// the link field has an unexpected shape and fails unless
/// [`Setting::LenientReceiverLink`] is enabled.
pub fn resolve_receiver<U: CompiledUnit>(
    oldest: &U,
    settings: &Settings,
) -> Result<Option<Rc<Receiver<U::Value>>>> {
    match oldest.receiver_link(RECEIVER_LINK_FIELD)? {
        ReceiverLink::Linked(receiver) => Ok(Some(receiver)),
        ReceiverLink::Unset => {
            log::debug!("{} has no receiver yet", oldest.class_name());
            Ok(None)
        }
        ReceiverLink::NoSuchField if settings.is_enabled(&Setting::LenientReceiverLink) => {
            log::warn!(
                "{} declares no `{}`, continuing without receiver",
                oldest.class_name(),
                RECEIVER_LINK_FIELD
            );
            Ok(None)
        }
        ReceiverLink::NoSuchField => Err(missing_receiver(oldest.class_name(), RECEIVER_LINK_FIELD)),
    }
}
