//! # Geodatabase Contracts
//!
//! Shapes from the platform's geodatabase library. Two calling conventions
//! recur: reset-then-advance enumerators (with a per-shape exhaustion
//! sentinel) and counted collections with positional reads. The two cursor
//! shapes are the odd ones out: they advance but cannot be rewound.

/// Counted collection of table fields.
pub trait FieldSet {
    type Field;

    /// Number of fields in the set.
    fn field_count(&self) -> usize;

    /// Field at `index`. Positional reads do not move any foreign cursor.
    fn field(&self, index: usize) -> Self::Field;
}

/// Forward enumerator over relationship classes.
pub trait RelationshipClassEnumerator {
    type RelationshipClass;

    fn reset(&mut self);

    /// Next relationship class, or `None` when exhausted.
    fn next_class(&mut self) -> Option<Self::RelationshipClass>;
}

/// Forward-only cursor over table rows.
///
/// There is no rewind on this shape: the cursor starts positioned before the
/// first row and only moves forward. The platform makes the caller
/// responsible for the cursor's lifetime; nothing in this workspace opens,
/// closes, or releases one.
pub trait RowCursor {
    type Row;

    /// Next row, or `None` when the cursor runs out.
    fn next_row(&mut self) -> Option<Self::Row>;
}

/// Forward-only cursor over features. Same family as [`RowCursor`]: no
/// rewind, caller-owned lifetime.
pub trait FeatureCursor {
    type Feature;

    /// Next feature, or `None` when the cursor runs out.
    fn next_feature(&mut self) -> Option<Self::Feature>;
}

/// Counted container of feature classes.
pub trait FeatureClassContainer {
    type FeatureClass;

    /// Number of classes in the container.
    fn class_count(&self) -> usize;

    /// Class at `index`. Positional reads do not move any foreign cursor.
    fn class(&self, index: usize) -> Self::FeatureClass;
}

/// Forward enumerator over feature classes.
pub trait FeatureClassEnumerator {
    type FeatureClass;

    fn reset(&mut self);

    /// Next feature class, or `None` when exhausted.
    fn next_class(&mut self) -> Option<Self::FeatureClass>;
}

/// Forward enumerator over a set of object IDs.
///
/// The platform signals exhaustion in-band: [`next_id`] returns a negative
/// value once the set runs out. Valid object IDs are never negative.
///
/// [`next_id`]: ObjectIdSet::next_id
pub trait ObjectIdSet {
    fn reset(&mut self);

    /// Next object ID, or any negative value when exhausted.
    fn next_id(&mut self) -> i32;
}

/// Forward enumerator over features, as handed out by selections.
pub trait FeatureEnumerator {
    type Feature;

    fn reset(&mut self);

    /// Next feature, or `None` when exhausted.
    fn next_feature(&mut self) -> Option<Self::Feature>;
}

/// Forward enumerator over relationships.
pub trait RelationshipEnumerator {
    type Relationship;

    fn reset(&mut self);

    /// Next relationship, or `None` when exhausted.
    fn next_relationship(&mut self) -> Option<Self::Relationship>;
}

/// Forward enumerator over datasets.
pub trait DatasetEnumerator {
    type Dataset;

    fn reset(&mut self);

    /// Next dataset, or `None` when exhausted.
    fn next_dataset(&mut self) -> Option<Self::Dataset>;
}

/// Forward enumerator over the subtypes of an object class.
///
/// Each advance returns a `(name, code)` pair. A missing or empty name
/// signals exhaustion; the code accompanying a terminal pair carries no
/// meaning.
pub trait SubtypeEnumerator {
    fn reset(&mut self);

    /// Next subtype name and code.
    fn next_subtype(&mut self) -> (Option<String>, i32);
}
