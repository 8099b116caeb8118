//! A board with position-based default resolution.
//!
//! [`LayeredBoard`] answers "what is at this position?" for every position
//! inside its limits, empty or not. Resolution goes through three layers,
//! first match wins:
//!
//! 1. an element placed at the position ([`Layer::Normal`]);
//! 2. a custom default registered at the position with
//!    [`set_default`](LayeredBoard::set_default) ([`Layer::CustomDefault`]);
//! 3. the master default given at construction ([`Layer::MasterDefault`]).
//!
//! All three surfaces live in one inner [`Board`]: ids are tagged with the
//! key space they belong to ([`LayerKey`]), positions with the surface they
//! are placed on ([`LayerSite`]). Errors raised by the inner board are
//! passed through with their ids and positions translated back.

use std::fmt::Debug;
use std::hash::Hash;

use boardkit_core::{BoardError, ErrorKind, Position};
use boardkit_space::{Limits, Site};
use tracing::trace;

use crate::board::{Board, Displace};
use crate::config::LayeredConfig;
use crate::view::ElementView;

/// An id tagged with the key space it lives in.
///
/// Normal and default elements may share an id without clashing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayerKey<K> {
    /// An element placed through the normal surface.
    Normal(K),
    /// A default element, including the master default.
    Default(K),
}

impl<K> LayerKey<K> {
    /// The untagged id.
    pub fn id(&self) -> &K {
        match self {
            Self::Normal(id) | Self::Default(id) => id,
        }
    }

    /// Drop the tag.
    pub fn into_id(self) -> K {
        match self {
            Self::Normal(id) | Self::Default(id) => id,
        }
    }
}

/// A position tagged with the surface it is placed on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayerSite {
    /// The normal placement surface.
    Normal(Position),
    /// The custom default surface.
    CustomDefault(Position),
}

impl LayerSite {
    /// The untagged position.
    pub fn position(&self) -> &Position {
        match self {
            Self::Normal(p) | Self::CustomDefault(p) => p,
        }
    }

    /// Drop the tag.
    pub fn into_position(self) -> Position {
        match self {
            Self::Normal(p) | Self::CustomDefault(p) => p,
        }
    }
}

impl Site for LayerSite {
    fn within(&self, limits: &Limits) -> bool {
        self.position().within(limits)
    }
}

/// The layer a position lookup was answered from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// An element placed at the position.
    Normal,
    /// A custom default registered at the position.
    CustomDefault,
    /// The master default.
    MasterDefault,
}

/// Result of [`LayeredBoard::get_at`].
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved<K, T> {
    /// Which layer answered.
    pub layer: Layer,
    /// The answering element. Its positions are those on its own surface.
    pub view: ElementView<K, T>,
}

impl<K, T> Resolved<K, T> {
    /// Whether the answer is a normally placed element rather than a default.
    pub fn is_normal(&self) -> bool {
        self.layer == Layer::Normal
    }
}

type Inner<K, T> = Board<LayerKey<K>, T, LayerSite>;

/// A [`Board`] whose position lookups fall back to defaults.
///
/// The normal surface behaves exactly like a plain board. Default elements
/// have their own id space, managed by [`add_default`](Self::add_default)
/// and [`update_default`](Self::update_default), and may be registered at
/// any number of positions on the custom default surface. The master
/// default always exists and cannot be removed.
///
/// # Examples
///
/// ```
/// use boardkit_board::{BoardConfig, Layer, LayeredBoard, LayeredConfig};
/// use boardkit_core::pos;
/// use boardkit_space::Limits;
///
/// let board = BoardConfig::new(Limits::new(pos![8, 8]).unwrap());
/// let mut layered: LayeredBoard<u32, String> =
///     LayeredBoard::new(LayeredConfig::new(board, 99, "Empty"));
///
/// let answer = layered.get_at(&pos![1, 1]).unwrap();
/// assert_eq!(answer.layer, Layer::MasterDefault);
/// assert_eq!(answer.view.id, 99);
///
/// layered.add_default(7, "Wall").unwrap();
/// layered.set_default(&7, pos![1, 1]).unwrap();
/// assert_eq!(layered.get_at(&pos![1, 1]).unwrap().view.id, 7);
///
/// layered.add(1, "Rook").unwrap();
/// layered.set(&1, pos![1, 1]).unwrap();
/// assert!(layered.get_at(&pos![1, 1]).unwrap().is_normal());
/// ```
#[derive(Clone, Debug)]
pub struct LayeredBoard<K, T> {
    inner: Inner<K, T>,
    default_id: K,
}

impl<K, T> LayeredBoard<K, T>
where
    K: Clone + Eq + Hash + Debug,
{
    /// Create a board holding only the master default.
    pub fn new(config: LayeredConfig<K, T>) -> Self {
        let mut inner: Inner<K, T> = Board::new(config.board);
        let seeded = inner.add(
            LayerKey::Default(config.default_id.clone()),
            config.default_element,
        );
        debug_assert!(seeded.is_ok(), "fresh board refused the master default");
        Self {
            inner,
            default_id: config.default_id,
        }
    }

    /// Display name of the board.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// The board's limits.
    pub fn limits(&self) -> &Limits {
        self.inner.limits()
    }

    /// Id of the master default.
    pub fn default_id(&self) -> &K {
        &self.default_id
    }

    // ── Normal surface ──────────────────────────────────────────

    /// See [`Board::add`].
    pub fn add(&mut self, id: K, element: impl Into<T>) -> Result<(), BoardError<K>> {
        self.inner
            .add(LayerKey::Normal(id), element)
            .map_err(translate_error)
    }

    /// See [`Board::update`].
    pub fn update(&mut self, id: &K, element: impl Into<T>) -> Result<(), BoardError<K>> {
        self.inner
            .update(&normal_key(id), element)
            .map_err(translate_error)
    }

    /// See [`Board::set`].
    pub fn set(&mut self, id: &K, position: Position) -> Result<(), BoardError<K>> {
        self.inner
            .set(&normal_key(id), LayerSite::Normal(position))
            .map_err(translate_error)
    }

    /// See [`Board::set_multi`].
    pub fn set_multi(&mut self, id: &K, position: Position) -> Result<(), BoardError<K>> {
        self.inner
            .set_multi(&normal_key(id), LayerSite::Normal(position))
            .map_err(translate_error)
    }

    /// See [`Board::unset`].
    pub fn unset(&mut self, id: &K) -> Result<(), BoardError<K>> {
        self.inner.unset(&normal_key(id)).map_err(translate_error)
    }

    /// See [`Board::unset_all`].
    pub fn unset_all(&mut self, id: &K) -> Result<(), BoardError<K>> {
        self.inner.unset_all(&normal_key(id)).map_err(translate_error)
    }

    /// See [`Board::unset_at`]. Custom defaults at `position` are untouched.
    pub fn unset_at(&mut self, position: &Position) -> Result<(), BoardError<K>> {
        self.inner
            .unset_at(&LayerSite::Normal(position.clone()))
            .map_err(translate_error)
    }

    /// See [`Board::move_at`].
    pub fn move_at(
        &mut self,
        origin: &Position,
        destiny: Position,
        displace: Displace,
    ) -> Result<(), BoardError<K>> {
        self.inner
            .move_at(
                &LayerSite::Normal(origin.clone()),
                LayerSite::Normal(destiny),
                displace,
            )
            .map_err(translate_error)
    }

    /// See [`Board::move_id`].
    pub fn move_id(
        &mut self,
        id: &K,
        destiny: Position,
        displace: Displace,
    ) -> Result<(), BoardError<K>> {
        self.inner
            .move_id(&normal_key(id), LayerSite::Normal(destiny), displace)
            .map_err(translate_error)
    }

    /// Read a normal element by id. Default ids are not visible here.
    ///
    /// # Errors
    ///
    /// `IdNonExistent` if no normal element has this id.
    pub fn get(&self, id: &K) -> Result<ElementView<K, T>, BoardError<K>> {
        self.inner
            .get(&normal_key(id))
            .map(translate_view)
            .map_err(translate_error)
    }

    /// Whether a normal element has this id.
    pub fn contains(&self, id: &K) -> bool {
        self.inner.contains(&normal_key(id))
    }

    /// Whether a normal element is placed at `position`.
    pub fn is_occupied(&self, position: &Position) -> bool {
        self.inner.is_occupied(&LayerSite::Normal(position.clone()))
    }

    // ── Default surface ─────────────────────────────────────────

    /// Add a default element, unplaced.
    ///
    /// # Errors
    ///
    /// `IdInUse` if a default element (the master default included) already
    /// has this id.
    pub fn add_default(&mut self, id: K, element: impl Into<T>) -> Result<(), BoardError<K>> {
        self.inner
            .add(LayerKey::Default(id), element)
            .map_err(translate_error)
    }

    /// Replace a default element, the master default included.
    ///
    /// # Errors
    ///
    /// `IdNonExistent` if no default element has this id.
    pub fn update_default(&mut self, id: &K, element: impl Into<T>) -> Result<(), BoardError<K>> {
        self.inner
            .update(&default_key(id), element)
            .map_err(translate_error)
    }

    /// Register a default element as the custom default at `position`.
    ///
    /// A default element may cover any number of positions.
    ///
    /// # Errors
    ///
    /// In check order: `IdNonExistent`, `PositionOutLimits`,
    /// `PositionOccupied` if another custom default covers `position`.
    pub fn set_default(&mut self, id: &K, position: Position) -> Result<(), BoardError<K>> {
        self.inner
            .set_multi(&default_key(id), LayerSite::CustomDefault(position))
            .map_err(translate_error)
    }

    /// Remove the custom default at `position`.
    ///
    /// # Errors
    ///
    /// In check order: `PositionOutLimits`, `PositionEmpty` if no custom
    /// default covers `position`.
    pub fn unset_default(&mut self, position: &Position) -> Result<(), BoardError<K>> {
        self.inner
            .unset_at(&LayerSite::CustomDefault(position.clone()))
            .map_err(translate_error)
    }

    /// Read a default element by id.
    ///
    /// # Errors
    ///
    /// `IdNonExistent` if no default element has this id.
    pub fn get_default(&self, id: &K) -> Result<ElementView<K, T>, BoardError<K>> {
        self.inner
            .get(&default_key(id))
            .map(translate_view)
            .map_err(translate_error)
    }

    /// Whether a default element has this id.
    pub fn contains_default(&self, id: &K) -> bool {
        self.inner.contains(&default_key(id))
    }

    // ── Resolution ──────────────────────────────────────────────

    /// Resolve `position` to a placed element, its custom default, or the
    /// master default, in that order.
    ///
    /// # Errors
    ///
    /// `PositionOutLimits` if `position` is outside the board.
    pub fn get_at(&self, position: &Position) -> Result<Resolved<K, T>, BoardError<K>> {
        if !position.within(self.inner.limits()) {
            let kind = ErrorKind::PositionOutLimits {
                position: position.clone(),
            };
            trace!(board = %self.inner.name(), tag = ?kind.tag(), "operation rejected");
            return Err(BoardError::new(self.inner.name(), kind));
        }
        let layers = [
            (Layer::Normal, LayerSite::Normal(position.clone())),
            (Layer::CustomDefault, LayerSite::CustomDefault(position.clone())),
        ];
        for (layer, site) in layers {
            if let Some(view) = self.inner.find_at(&site) {
                trace!(board = %self.inner.name(), ?position, ?layer, "position resolved");
                return Ok(Resolved {
                    layer,
                    view: translate_view(view),
                });
            }
        }
        trace!(board = %self.inner.name(), ?position, "position fell back to master default");
        self.get_default(&self.default_id).map(|view| Resolved {
            layer: Layer::MasterDefault,
            view,
        })
    }

    /// Every custom default placement with its default id, in placement order.
    pub fn custom_defaults(&self) -> impl Iterator<Item = (&Position, &K)> {
        self.inner.placements().filter_map(|(site, key)| match site {
            LayerSite::CustomDefault(p) => Some((p, key.id())),
            LayerSite::Normal(_) => None,
        })
    }

    /// Every normal placement with its id, in placement order.
    pub fn placements(&self) -> impl Iterator<Item = (&Position, &K)> {
        self.inner.placements().filter_map(|(site, key)| match site {
            LayerSite::Normal(p) => Some((p, key.id())),
            LayerSite::CustomDefault(_) => None,
        })
    }
}

fn normal_key<K: Clone>(id: &K) -> LayerKey<K> {
    LayerKey::Normal(id.clone())
}

fn default_key<K: Clone>(id: &K) -> LayerKey<K> {
    LayerKey::Default(id.clone())
}

fn translate_error<K>(err: BoardError<LayerKey<K>, LayerSite>) -> BoardError<K> {
    err.map(LayerKey::into_id, LayerSite::into_position)
}

fn translate_view<K, T>(view: ElementView<LayerKey<K>, T, LayerSite>) -> ElementView<K, T> {
    ElementView {
        id: view.id.into_id(),
        element: view.element,
        positions: view
            .positions
            .into_iter()
            .map(LayerSite::into_position)
            .collect(),
    }
}
