//! # Carto Contracts
//!
//! Shapes from the platform's map-document library: the map itself and the
//! enumerator it hands out for its layer stack.

/// Read access to the layer stack of a map document.
///
/// The platform returns the stack as an owned [`LayerEnumerator`], or nothing
/// at all for a map without a layer collection.
pub trait Map {
    /// Enumerator shape produced by [`Map::layer_set`].
    type LayerSet: LayerEnumerator;

    /// Returns the map's layer enumerator, or `None` when the map holds no
    /// layer collection.
    fn layer_set(&self) -> Option<Self::LayerSet>;
}

/// Forward enumerator over map layers.
///
/// Mirrors the platform's reset-then-advance calling convention: [`reset`]
/// rewinds the foreign cursor, [`next_layer`] advances it and returns `None`
/// once the stack is exhausted. The cursor is shared, mutable state inside
/// the foreign object; interleaving two traversals over one enumerator is
/// undefined.
///
/// [`reset`]: LayerEnumerator::reset
/// [`next_layer`]: LayerEnumerator::next_layer
pub trait LayerEnumerator {
    type Layer;

    /// Rewinds the foreign cursor to the first layer.
    fn reset(&mut self);

    /// Advances the foreign cursor, returning the next layer or `None` at
    /// the end of the stack.
    fn next_layer(&mut self) -> Option<Self::Layer>;
}
