use super::error::{empty_record, unreadable_history, Result};
use crate::session::history::{History, StorageOrder};
use std::rc::Rc;

/// Compiled units of `history`, oldest first.
pub fn ordered_units<H: History>(history: &H) -> Result<Vec<Rc<H::Unit>>> {
    let records = history.records().ok_or_else(unreadable_history)?;

    let mut units = records
        .iter()
        .map(|record| record.unit.clone().ok_or_else(|| empty_record(record.generation)))
        .collect::<Result<Vec<_>>>()?;

    if history.storage_order() == StorageOrder::NewestFirst {
        units.reverse();
    }

    log::trace!("traversed {} history records", units.len());
    Ok(units)
}
