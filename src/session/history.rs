use super::unit::CompiledUnit;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOrder {
    OldestFirst,
    NewestFirst,
}

#[derive(Debug)]
pub struct HistoryRecord<U> {
    pub generation: u64,
    pub unit: Option<Rc<U>>,
}

impl<U> HistoryRecord<U> {
    pub fn new(generation: u64, unit: Rc<U>) -> Self {
        Self {
            generation,
            unit: Some(unit),
        }
    }
}

/// The interpreter's record of evaluated units.
pub trait History {
    type Unit: CompiledUnit;

    fn storage_order(&self) -> StorageOrder;

    /// All records in storage order, or `None` when the history can't be read.
    fn records(&self) -> Option<&[HistoryRecord<Self::Unit>]>;
}

/// A history kept like the interpreter's evaluation stack: the newest record first.
#[derive(Debug)]
pub struct SessionHistory<U> {
    records: Vec<HistoryRecord<U>>,
    next_generation: u64,
}

impl<U: CompiledUnit> SessionHistory<U> {
    pub fn new() -> Self {
        Self {
            records: vec![],
            next_generation: 1,
        }
    }

    pub fn push(&mut self, unit: U) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;
        self.records
            .insert(0, HistoryRecord::new(generation, Rc::new(unit)));
        generation
    }

    /// Drops the newest record, as the interpreter does when an evaluation is rolled back.
    pub fn pop(&mut self) -> Option<Rc<U>> {
        if self.records.is_empty() {
            None
        } else {
            self.records.remove(0).unit
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<U: CompiledUnit> Default for SessionHistory<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: CompiledUnit> History for SessionHistory<U> {
    type Unit = U;

    fn storage_order(&self) -> StorageOrder {
        StorageOrder::NewestFirst
    }

    fn records(&self) -> Option<&[HistoryRecord<U>]> {
        Some(&self.records)
    }
}
