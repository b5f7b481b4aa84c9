//! Scripted stand-ins for the foreign platform objects, with call
//! accounting so tests can pin down exactly how often the adapters touch
//! them.

use std::cell::Cell;

use anyhow::Context;

use gisenum_common::carto::{LayerEnumerator, Map};
use gisenum_common::geodatabase::{
    DatasetEnumerator, FeatureClassContainer, FeatureClassEnumerator, FeatureCursor,
    FeatureEnumerator, FieldSet, ObjectIdSet, RelationshipClassEnumerator,
    RelationshipEnumerator, RowCursor, SubtypeEnumerator,
};
use gisenum_common::system::{LongArray, ObjectArray, StringEnumerator};

/// Reset-then-advance source preloaded with a script of items.
///
/// Implements every enumerator shape whose element type fits `T`, so one
/// fixture covers the whole reset-then-advance family. `resets` and
/// `advances` count every foreign call the adapters make.
#[derive(Clone)]
pub struct Scripted<T> {
    items: Vec<T>,
    cursor: usize,
    pub resets: usize,
    pub advances: usize,
}

impl<T: Clone> Scripted<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            cursor: 0,
            resets: 0,
            advances: 0,
        }
    }

    fn rewind(&mut self) {
        self.resets += 1;
        self.cursor = 0;
    }

    fn pull(&mut self) -> Option<T> {
        self.advances += 1;
        let item = self.items.get(self.cursor).cloned();
        self.cursor += 1;
        item
    }
}

impl<T: Clone> LayerEnumerator for Scripted<T> {
    type Layer = T;

    fn reset(&mut self) {
        self.rewind();
    }

    fn next_layer(&mut self) -> Option<T> {
        self.pull()
    }
}

impl<T: Clone> RelationshipClassEnumerator for Scripted<T> {
    type RelationshipClass = T;

    fn reset(&mut self) {
        self.rewind();
    }

    fn next_class(&mut self) -> Option<T> {
        self.pull()
    }
}

impl<T: Clone> RowCursor for Scripted<T> {
    type Row = T;

    fn next_row(&mut self) -> Option<T> {
        self.pull()
    }
}

impl<T: Clone> FeatureCursor for Scripted<T> {
    type Feature = T;

    fn next_feature(&mut self) -> Option<T> {
        self.pull()
    }
}

impl<T: Clone> FeatureClassEnumerator for Scripted<T> {
    type FeatureClass = T;

    fn reset(&mut self) {
        self.rewind();
    }

    fn next_class(&mut self) -> Option<T> {
        self.pull()
    }
}

impl<T: Clone> FeatureEnumerator for Scripted<T> {
    type Feature = T;

    fn reset(&mut self) {
        self.rewind();
    }

    fn next_feature(&mut self) -> Option<T> {
        self.pull()
    }
}

impl<T: Clone> RelationshipEnumerator for Scripted<T> {
    type Relationship = T;

    fn reset(&mut self) {
        self.rewind();
    }

    fn next_relationship(&mut self) -> Option<T> {
        self.pull()
    }
}

impl<T: Clone> DatasetEnumerator for Scripted<T> {
    type Dataset = T;

    fn reset(&mut self) {
        self.rewind();
    }

    fn next_dataset(&mut self) -> Option<T> {
        self.pull()
    }
}

/// Object IDs exhaust in-band: pulls past the script return `-1`.
impl ObjectIdSet for Scripted<i32> {
    fn reset(&mut self) {
        self.rewind();
    }

    fn next_id(&mut self) -> i32 {
        self.pull().unwrap_or(-1)
    }
}

impl SubtypeEnumerator for Scripted<(String, i32)> {
    fn reset(&mut self) {
        self.rewind();
    }

    fn next_subtype(&mut self) -> (Option<String>, i32) {
        match self.pull() {
            Some((name, code)) => (Some(name), code),
            None => (None, 0),
        }
    }
}

impl StringEnumerator for Scripted<String> {
    fn reset(&mut self) {
        self.rewind();
    }

    fn next_string(&mut self) -> Option<String> {
        self.pull()
    }
}

/// Counted source with positional reads. Covers the whole indexed family;
/// the `Cell` counters keep the read accounting observable through the
/// shared borrows the indexed shapes use.
pub struct Counted<T> {
    items: Vec<T>,
    pub count_reads: Cell<usize>,
    pub element_reads: Cell<usize>,
}

impl<T: Clone> Counted<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            count_reads: Cell::new(0),
            element_reads: Cell::new(0),
        }
    }

    fn len(&self) -> usize {
        self.count_reads.set(self.count_reads.get() + 1);
        self.items.len()
    }

    fn read(&self, index: usize) -> T {
        self.element_reads.set(self.element_reads.get() + 1);
        self.items[index].clone()
    }
}

impl<T: Clone> FieldSet for Counted<T> {
    type Field = T;

    fn field_count(&self) -> usize {
        self.len()
    }

    fn field(&self, index: usize) -> T {
        self.read(index)
    }
}

impl<T: Clone> FeatureClassContainer for Counted<T> {
    type FeatureClass = T;

    fn class_count(&self) -> usize {
        self.len()
    }

    fn class(&self, index: usize) -> T {
        self.read(index)
    }
}

impl LongArray for Counted<i32> {
    fn count(&self) -> usize {
        self.len()
    }

    fn element(&self, index: usize) -> i32 {
        self.read(index)
    }
}

impl<T: Clone> ObjectArray for Counted<T> {
    type Element = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn element(&self, index: usize) -> T {
        self.read(index)
    }
}

/// Map document handing out a scripted layer set, or none at all.
pub struct FakeMap {
    pub layer_set: Option<Scripted<String>>,
}

impl Map for FakeMap {
    type LayerSet = Scripted<String>;

    fn layer_set(&self) -> Option<Scripted<String>> {
        self.layer_set.clone()
    }
}

/// Cursor that faults on its first advance, standing in for a platform
/// object in a bad state.
pub struct FaultyCursor;

impl RowCursor for FaultyCursor {
    type Row = i32;

    fn next_row(&mut self) -> Option<i32> {
        panic!("platform cursor fault")
    }
}

/// Builds a scripted subtype enumerator from `"Name=code, Name=code"`.
pub fn subtype_script(script: &str) -> anyhow::Result<Scripted<(String, i32)>> {
    let mut entries = Vec::new();
    for part in script.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (name, code) = part
            .split_once('=')
            .with_context(|| format!("subtype entry without a code: {part}"))?;
        let code = code
            .trim()
            .parse::<i32>()
            .with_context(|| format!("bad subtype code in: {part}"))?;
        entries.push((name.trim().to_owned(), code));
    }
    Ok(Scripted::new(entries))
}

/// Scripted strings from plain literals.
pub fn string_script(items: &[&str]) -> Scripted<String> {
    Scripted::new(items.iter().map(|s| (*s).to_owned()).collect())
}
