//! # Geodatabase Adapters
//!
//! Adapters over the geodatabase shapes: cursors, field sets, class
//! containers and the reset-then-advance enumerator family. The traversal
//! loops live in [`crate::pass`]; this module only names the foreign calls
//! and the sentinel of each shape.

use std::marker::PhantomData;

use gisenum_common::geodatabase::{
    DatasetEnumerator, FeatureClassContainer, FeatureClassEnumerator, FeatureCursor,
    FeatureEnumerator, FieldSet, ObjectIdSet, RelationshipClassEnumerator,
    RelationshipEnumerator, RowCursor, SubtypeEnumerator,
};

use crate::pass::{IndexedPass, IndexedProtocol, Pass, PullProtocol};

/// Positional protocol of a [`FieldSet`].
pub struct ByField<F: ?Sized>(PhantomData<F>);

impl<F> IndexedProtocol for ByField<F>
where
    F: FieldSet + ?Sized,
{
    type Source = F;
    type Item = F::Field;

    fn count(source: &F) -> usize {
        source.field_count()
    }

    fn at(source: &F, index: usize) -> F::Field {
        source.field(index)
    }
}

/// Reset-then-advance protocol of a [`RelationshipClassEnumerator`].
pub struct ByRelationshipClass<E: ?Sized>(PhantomData<E>);

impl<E> PullProtocol for ByRelationshipClass<E>
where
    E: RelationshipClassEnumerator + ?Sized,
{
    type Source = E;
    type Raw = Option<E::RelationshipClass>;
    type Item = E::RelationshipClass;

    fn reset(source: &mut E) {
        source.reset();
    }

    fn advance(source: &mut E) -> Option<E::RelationshipClass> {
        source.next_class()
    }

    fn accept(raw: Option<E::RelationshipClass>) -> Option<E::RelationshipClass> {
        raw
    }
}

/// Advance-only protocol of a [`RowCursor`]. No rewind exists on the shape,
/// so the pass keeps the default no-op reset.
pub struct ByRow<C: ?Sized>(PhantomData<C>);

impl<C> PullProtocol for ByRow<C>
where
    C: RowCursor + ?Sized,
{
    type Source = C;
    type Raw = Option<C::Row>;
    type Item = C::Row;

    fn advance(source: &mut C) -> Option<C::Row> {
        source.next_row()
    }

    fn accept(raw: Option<C::Row>) -> Option<C::Row> {
        raw
    }
}

/// Advance-only protocol of a [`FeatureCursor`].
pub struct ByCursorFeature<C: ?Sized>(PhantomData<C>);

impl<C> PullProtocol for ByCursorFeature<C>
where
    C: FeatureCursor + ?Sized,
{
    type Source = C;
    type Raw = Option<C::Feature>;
    type Item = C::Feature;

    fn advance(source: &mut C) -> Option<C::Feature> {
        source.next_feature()
    }

    fn accept(raw: Option<C::Feature>) -> Option<C::Feature> {
        raw
    }
}

/// Positional protocol of a [`FeatureClassContainer`].
pub struct ByContainedClass<C: ?Sized>(PhantomData<C>);

impl<C> IndexedProtocol for ByContainedClass<C>
where
    C: FeatureClassContainer + ?Sized,
{
    type Source = C;
    type Item = C::FeatureClass;

    fn count(source: &C) -> usize {
        source.class_count()
    }

    fn at(source: &C, index: usize) -> C::FeatureClass {
        source.class(index)
    }
}

/// Reset-then-advance protocol of a [`FeatureClassEnumerator`].
pub struct ByFeatureClass<E: ?Sized>(PhantomData<E>);

impl<E> PullProtocol for ByFeatureClass<E>
where
    E: FeatureClassEnumerator + ?Sized,
{
    type Source = E;
    type Raw = Option<E::FeatureClass>;
    type Item = E::FeatureClass;

    fn reset(source: &mut E) {
        source.reset();
    }

    fn advance(source: &mut E) -> Option<E::FeatureClass> {
        source.next_class()
    }

    fn accept(raw: Option<E::FeatureClass>) -> Option<E::FeatureClass> {
        raw
    }
}

/// Reset-then-advance protocol of an [`ObjectIdSet`]. The sentinel is
/// in-band: any negative ID ends the pass.
pub struct ById<S: ?Sized>(PhantomData<S>);

impl<S> PullProtocol for ById<S>
where
    S: ObjectIdSet + ?Sized,
{
    type Source = S;
    type Raw = i32;
    type Item = i32;

    fn reset(source: &mut S) {
        source.reset();
    }

    fn advance(source: &mut S) -> i32 {
        source.next_id()
    }

    fn accept(raw: i32) -> Option<i32> {
        (raw >= 0).then_some(raw)
    }
}

/// Reset-then-advance protocol of a [`FeatureEnumerator`].
pub struct ByFeature<E: ?Sized>(PhantomData<E>);

impl<E> PullProtocol for ByFeature<E>
where
    E: FeatureEnumerator + ?Sized,
{
    type Source = E;
    type Raw = Option<E::Feature>;
    type Item = E::Feature;

    fn reset(source: &mut E) {
        source.reset();
    }

    fn advance(source: &mut E) -> Option<E::Feature> {
        source.next_feature()
    }

    fn accept(raw: Option<E::Feature>) -> Option<E::Feature> {
        raw
    }
}

/// Reset-then-advance protocol of a [`RelationshipEnumerator`].
pub struct ByRelationship<E: ?Sized>(PhantomData<E>);

impl<E> PullProtocol for ByRelationship<E>
where
    E: RelationshipEnumerator + ?Sized,
{
    type Source = E;
    type Raw = Option<E::Relationship>;
    type Item = E::Relationship;

    fn reset(source: &mut E) {
        source.reset();
    }

    fn advance(source: &mut E) -> Option<E::Relationship> {
        source.next_relationship()
    }

    fn accept(raw: Option<E::Relationship>) -> Option<E::Relationship> {
        raw
    }
}

/// Reset-then-advance protocol of a [`DatasetEnumerator`].
pub struct ByDataset<E: ?Sized>(PhantomData<E>);

impl<E> PullProtocol for ByDataset<E>
where
    E: DatasetEnumerator + ?Sized,
{
    type Source = E;
    type Raw = Option<E::Dataset>;
    type Item = E::Dataset;

    fn reset(source: &mut E) {
        source.reset();
    }

    fn advance(source: &mut E) -> Option<E::Dataset> {
        source.next_dataset()
    }

    fn accept(raw: Option<E::Dataset>) -> Option<E::Dataset> {
        raw
    }
}

/// Reset-then-advance protocol of a [`SubtypeEnumerator`].
///
/// The only non-identity conversion in the layer: the foreign `(name, code)`
/// pair is repackaged as a name→code association. A missing or empty name is
/// the sentinel.
pub struct BySubtype<E: ?Sized>(PhantomData<E>);

impl<E> PullProtocol for BySubtype<E>
where
    E: SubtypeEnumerator + ?Sized,
{
    type Source = E;
    type Raw = (Option<String>, i32);
    type Item = (String, i32);

    fn reset(source: &mut E) {
        source.reset();
    }

    fn advance(source: &mut E) -> (Option<String>, i32) {
        source.next_subtype()
    }

    fn accept(raw: (Option<String>, i32)) -> Option<(String, i32)> {
        match raw {
            (Some(name), code) if !name.is_empty() => Some((name, code)),
            _ => None,
        }
    }
}

/// Lazy iterator over the fields of a [`FieldSet`].
pub type Fields<'a, F> = IndexedPass<&'a F, ByField<F>>;

/// Lazy iterator over relationship classes.
pub type RelationshipClasses<'a, E> = Pass<&'a mut E, ByRelationshipClass<E>>;

/// Lazy iterator over the rows of a [`RowCursor`].
pub type Rows<'a, C> = Pass<&'a mut C, ByRow<C>>;

/// Lazy iterator over the features of a [`FeatureCursor`].
pub type CursorFeatures<'a, C> = Pass<&'a mut C, ByCursorFeature<C>>;

/// Lazy iterator over the classes of a [`FeatureClassContainer`].
pub type ContainedClasses<'a, C> = IndexedPass<&'a C, ByContainedClass<C>>;

/// Lazy iterator over feature classes.
pub type FeatureClasses<'a, E> = Pass<&'a mut E, ByFeatureClass<E>>;

/// Lazy iterator over the IDs of an [`ObjectIdSet`].
pub type ObjectIds<'a, S> = Pass<&'a mut S, ById<S>>;

/// Lazy iterator over enumerated features.
pub type Features<'a, E> = Pass<&'a mut E, ByFeature<E>>;

/// Lazy iterator over relationships.
pub type Relationships<'a, E> = Pass<&'a mut E, ByRelationship<E>>;

/// Lazy iterator over datasets.
pub type Datasets<'a, E> = Pass<&'a mut E, ByDataset<E>>;

/// Lazy iterator over name→code subtype associations.
pub type Subtypes<'a, E> = Pass<&'a mut E, BySubtype<E>>;

/// Starts a lazy positional pass over `source`'s fields. An absent source
/// yields an empty pass.
pub fn fields<F>(source: Option<&F>) -> Fields<'_, F>
where
    F: FieldSet + ?Sized,
{
    IndexedPass::over(source)
}

/// Starts a lazy pass over `source`'s relationship classes. An absent
/// source yields an empty pass.
pub fn relationship_classes<E>(source: Option<&mut E>) -> RelationshipClasses<'_, E>
where
    E: RelationshipClassEnumerator + ?Sized,
{
    Pass::over(source)
}

/// Starts a lazy pass over `source`'s remaining rows. An absent source
/// yields an empty pass.
///
/// The pass never releases the cursor; its lifetime stays with the caller,
/// exactly as the platform requires.
pub fn rows<C>(source: Option<&mut C>) -> Rows<'_, C>
where
    C: RowCursor + ?Sized,
{
    Pass::over(source)
}

/// Starts a lazy pass over `source`'s remaining features. An absent source
/// yields an empty pass. Cursor lifetime stays with the caller, as with
/// [`rows`].
pub fn cursor_features<C>(source: Option<&mut C>) -> CursorFeatures<'_, C>
where
    C: FeatureCursor + ?Sized,
{
    Pass::over(source)
}

/// Starts a lazy positional pass over `source`'s feature classes. An absent
/// source yields an empty pass.
pub fn contained_classes<C>(source: Option<&C>) -> ContainedClasses<'_, C>
where
    C: FeatureClassContainer + ?Sized,
{
    IndexedPass::over(source)
}

/// Starts a lazy pass over `source`'s feature classes. An absent source
/// yields an empty pass.
pub fn feature_classes<E>(source: Option<&mut E>) -> FeatureClasses<'_, E>
where
    E: FeatureClassEnumerator + ?Sized,
{
    Pass::over(source)
}

/// Starts a lazy pass over `source`'s object IDs, ending at the first
/// negative ID. An absent source yields an empty pass.
pub fn object_ids<S>(source: Option<&mut S>) -> ObjectIds<'_, S>
where
    S: ObjectIdSet + ?Sized,
{
    Pass::over(source)
}

/// Starts a lazy pass over `source`'s features. An absent source yields an
/// empty pass.
pub fn features<E>(source: Option<&mut E>) -> Features<'_, E>
where
    E: FeatureEnumerator + ?Sized,
{
    Pass::over(source)
}

/// Starts a lazy pass over `source`'s relationships. An absent source
/// yields an empty pass.
pub fn relationships<E>(source: Option<&mut E>) -> Relationships<'_, E>
where
    E: RelationshipEnumerator + ?Sized,
{
    Pass::over(source)
}

/// Starts a lazy pass over `source`'s datasets. An absent source yields an
/// empty pass.
pub fn datasets<E>(source: Option<&mut E>) -> Datasets<'_, E>
where
    E: DatasetEnumerator + ?Sized,
{
    Pass::over(source)
}

/// Starts a lazy pass over `source`'s subtypes as name→code associations,
/// ending at the first missing or empty name. An absent source yields an
/// empty pass.
pub fn subtypes<E>(source: Option<&mut E>) -> Subtypes<'_, E>
where
    E: SubtypeEnumerator + ?Sized,
{
    Pass::over(source)
}

/// Method-call surface over [`fields`].
pub trait FieldSetExt: FieldSet {
    /// Adapts this set into a lazy [`Iterator`] over its fields.
    fn iter_fields(&self) -> Fields<'_, Self> {
        fields(Some(self))
    }
}

impl<F> FieldSetExt for F where F: FieldSet + ?Sized {}

/// Method-call surface over [`relationship_classes`].
pub trait RelationshipClassEnumeratorExt: RelationshipClassEnumerator {
    /// Adapts this enumerator into a lazy [`Iterator`] over its classes.
    fn iter_classes(&mut self) -> RelationshipClasses<'_, Self> {
        relationship_classes(Some(self))
    }
}

impl<E> RelationshipClassEnumeratorExt for E where E: RelationshipClassEnumerator + ?Sized {}

/// Method-call surface over [`rows`].
pub trait RowCursorExt: RowCursor {
    /// Adapts this cursor into a lazy [`Iterator`] over its remaining rows.
    ///
    /// The iterator does not release the cursor when dropped; disposing of
    /// it stays the caller's responsibility.
    fn iter_rows(&mut self) -> Rows<'_, Self> {
        rows(Some(self))
    }
}

impl<C> RowCursorExt for C where C: RowCursor + ?Sized {}

/// Method-call surface over [`cursor_features`].
pub trait FeatureCursorExt: FeatureCursor {
    /// Adapts this cursor into a lazy [`Iterator`] over its remaining
    /// features. Cursor disposal stays the caller's responsibility.
    fn iter_features(&mut self) -> CursorFeatures<'_, Self> {
        cursor_features(Some(self))
    }
}

impl<C> FeatureCursorExt for C where C: FeatureCursor + ?Sized {}

/// Method-call surface over [`contained_classes`].
pub trait FeatureClassContainerExt: FeatureClassContainer {
    /// Adapts this container into a lazy [`Iterator`] over its classes.
    fn iter_classes(&self) -> ContainedClasses<'_, Self> {
        contained_classes(Some(self))
    }
}

impl<C> FeatureClassContainerExt for C where C: FeatureClassContainer + ?Sized {}

/// Method-call surface over [`feature_classes`].
pub trait FeatureClassEnumeratorExt: FeatureClassEnumerator {
    /// Adapts this enumerator into a lazy [`Iterator`] over its classes.
    fn iter_classes(&mut self) -> FeatureClasses<'_, Self> {
        feature_classes(Some(self))
    }
}

impl<E> FeatureClassEnumeratorExt for E where E: FeatureClassEnumerator + ?Sized {}

/// Method-call surface over [`object_ids`].
pub trait ObjectIdSetExt: ObjectIdSet {
    /// Adapts this set into a lazy [`Iterator`] over its object IDs.
    fn iter_ids(&mut self) -> ObjectIds<'_, Self> {
        object_ids(Some(self))
    }
}

impl<S> ObjectIdSetExt for S where S: ObjectIdSet + ?Sized {}

/// Method-call surface over [`features`].
pub trait FeatureEnumeratorExt: FeatureEnumerator {
    /// Adapts this enumerator into a lazy [`Iterator`] over its features.
    fn iter_features(&mut self) -> Features<'_, Self> {
        features(Some(self))
    }
}

impl<E> FeatureEnumeratorExt for E where E: FeatureEnumerator + ?Sized {}

/// Method-call surface over [`relationships`].
pub trait RelationshipEnumeratorExt: RelationshipEnumerator {
    /// Adapts this enumerator into a lazy [`Iterator`] over its
    /// relationships.
    fn iter_relationships(&mut self) -> Relationships<'_, Self> {
        relationships(Some(self))
    }
}

impl<E> RelationshipEnumeratorExt for E where E: RelationshipEnumerator + ?Sized {}

/// Method-call surface over [`datasets`].
pub trait DatasetEnumeratorExt: DatasetEnumerator {
    /// Adapts this enumerator into a lazy [`Iterator`] over its datasets.
    fn iter_datasets(&mut self) -> Datasets<'_, Self> {
        datasets(Some(self))
    }
}

impl<E> DatasetEnumeratorExt for E where E: DatasetEnumerator + ?Sized {}

/// Method-call surface over [`subtypes`].
pub trait SubtypeEnumeratorExt: SubtypeEnumerator {
    /// Adapts this enumerator into a lazy [`Iterator`] over name→code
    /// subtype associations.
    fn iter_subtypes(&mut self) -> Subtypes<'_, Self> {
        subtypes(Some(self))
    }
}

impl<E> SubtypeEnumeratorExt for E where E: SubtypeEnumerator + ?Sized {}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
