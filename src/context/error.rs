use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("ReflectiveAccessError: reading `{member}` on {owner} failed: {reason}")]
    ReflectiveAccess {
        owner: String,
        member: String,
        reason: String,
    },
    #[error("MissingReceiverError: {unit} declares no receiver link `{field}`")]
    MissingReceiver { unit: String, field: String },
    #[error("NullHistoryError: {0}")]
    NullHistory(HistoryFault),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HistoryFault {
    #[error("history is unreadable")]
    Unreadable,
    #[error("record {0} holds no compiled unit")]
    EmptyRecord(u64),
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn reflective_access<O: Into<String>, M: Into<String>, R: Into<String>>(
    owner: O,
    member: M,
    reason: R,
) -> Error {
    Error::ReflectiveAccess {
        owner: owner.into(),
        member: member.into(),
        reason: reason.into(),
    }
}

pub fn missing_receiver<U: Into<String>, F: Into<String>>(unit: U, field: F) -> Error {
    Error::MissingReceiver {
        unit: unit.into(),
        field: field.into(),
    }
}

pub fn unreadable_history() -> Error {
    Error::NullHistory(HistoryFault::Unreadable)
}

pub fn empty_record(generation: u64) -> Error {
    Error::NullHistory(HistoryFault::EmptyRecord(generation))
}
