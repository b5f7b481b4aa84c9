//! # Carto Adapters
//!
//! Adapters over the map-document shapes: the layer enumerator, and the map
//! itself via the layer set it hands out.

use std::marker::PhantomData;

use gisenum_common::carto::{LayerEnumerator, Map};

use crate::pass::{Pass, PullProtocol};

/// Reset-then-advance protocol of a [`LayerEnumerator`].
pub struct ByLayer<E: ?Sized>(PhantomData<E>);

impl<E> PullProtocol for ByLayer<E>
where
    E: LayerEnumerator + ?Sized,
{
    type Source = E;
    type Raw = Option<E::Layer>;
    type Item = E::Layer;

    fn reset(source: &mut E) {
        source.reset();
    }

    fn advance(source: &mut E) -> Option<E::Layer> {
        source.next_layer()
    }

    fn accept(raw: Option<E::Layer>) -> Option<E::Layer> {
        raw
    }
}

/// Lazy iterator over the layers of a borrowed [`LayerEnumerator`].
pub type Layers<'a, E> = Pass<&'a mut E, ByLayer<E>>;

/// Lazy iterator over the layers of the enumerator a [`Map`] hands out.
pub type MapLayers<E> = Pass<E, ByLayer<E>>;

/// Starts a lazy pass over `source`'s layers. An absent source yields an
/// empty pass.
pub fn layers<E>(source: Option<&mut E>) -> Layers<'_, E>
where
    E: LayerEnumerator + ?Sized,
{
    Pass::over(source)
}

/// Starts a lazy pass over the layers of `map`.
///
/// An absent map and a map without a layer collection both yield an empty
/// pass; otherwise the map's owned layer enumerator is traversed exactly as
/// [`layers`] would.
pub fn map_layers<M>(map: Option<&M>) -> MapLayers<M::LayerSet>
where
    M: Map + ?Sized,
{
    Pass::over(map.and_then(Map::layer_set))
}

/// Method-call surface over [`layers`].
pub trait LayerEnumeratorExt: LayerEnumerator {
    /// Adapts this enumerator into a lazy [`Iterator`] over its layers.
    ///
    /// Each call starts a fresh pass: the foreign cursor is rewound on the
    /// first pull, not before.
    fn iter_layers(&mut self) -> Layers<'_, Self> {
        layers(Some(self))
    }
}

impl<E> LayerEnumeratorExt for E where E: LayerEnumerator + ?Sized {}

/// Method-call surface over [`map_layers`].
pub trait MapExt: Map {
    /// Adapts this map's layer set into a lazy [`Iterator`] over its layers.
    fn iter_layers(&self) -> MapLayers<Self::LayerSet> {
        map_layers(Some(self))
    }
}

impl<M> MapExt for M where M: Map + ?Sized {}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
