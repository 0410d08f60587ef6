use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

pub const MIN_WINDOW_WIDTH: i32 = 300;
pub const MIN_WINDOW_HEIGHT: i32 = 200;
pub const DEFAULT_WINDOW_WIDTH: i32 = 600;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 400;
/// Top-left of the first cascaded window.
pub const CASCADE_ORIGIN_X: i32 = 100;
pub const CASCADE_ORIGIN_Y: i32 = 50;
pub const CASCADE_STEP: i32 = 30;
/// Number of cascade slots before placement wraps back to the origin.
pub const CASCADE_PERIOD: usize = 5;
/// Initial value of the stacking counter; the first raise yields `BASE_Z_INDEX + 1`.
pub const BASE_Z_INDEX: u32 = 100;

/// Application identifier. A window's id is the id of the app it shows, so at most one window per
/// app is open at a time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AppId(pub String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    /// Clamps both axes so the window cannot leave the top/left edge of the desktop.
    pub fn clamped_to_origin(self) -> Self {
        Self {
            x: self.x.max(0),
            y: self.y.max(0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

impl WindowSize {
    pub fn clamped_min(self) -> Self {
        Self {
            width: self.width.max(MIN_WINDOW_WIDTH),
            height: self.height.max(MIN_WINDOW_HEIGHT),
        }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Axis-aligned rectangle, used for the desktop viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: AppId,
    pub title: String,
    pub icon: String,
    pub position: WindowPosition,
    pub size: WindowSize,
    pub z_index: u32,
    pub is_minimized: bool,
    pub is_maximized: bool,
}

/// Open windows keyed by id, iterated in open order.
///
/// Records are shared behind [`Rc`] so cloning the store for a new state snapshot is cheap; a
/// mutation copies only the record it touches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowStore {
    order: Vec<AppId>,
    records: HashMap<AppId, Rc<WindowRecord>>,
}

impl WindowStore {
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: &AppId) -> bool {
        self.records.contains_key(id)
    }

    pub fn get(&self, id: &AppId) -> Option<&WindowRecord> {
        self.records.get(id).map(Rc::as_ref)
    }

    /// Returns a uniquely owned record for `id`, copying it first if a snapshot still shares it.
    pub fn get_mut(&mut self, id: &AppId) -> Option<&mut WindowRecord> {
        self.records.get_mut(id).map(Rc::make_mut)
    }

    /// Inserts a record at the end of the open order. Returns `false` (and leaves the store
    /// untouched) when the id is already present.
    pub fn insert(&mut self, record: WindowRecord) -> bool {
        if self.records.contains_key(&record.id) {
            return false;
        }
        self.order.push(record.id.clone());
        self.records.insert(record.id.clone(), Rc::new(record));
        true
    }

    pub fn remove(&mut self, id: &AppId) -> Option<WindowRecord> {
        let record = self.records.remove(id)?;
        self.order.retain(|entry| entry != id);
        Some(Rc::try_unwrap(record).unwrap_or_else(|shared| (*shared).clone()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &WindowRecord> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id).map(Rc::as_ref))
    }

    pub fn ids(&self) -> Vec<AppId> {
        self.order.clone()
    }
}

/// Transient overlay currently shown over the desktop.
///
/// `armed` turns true one tick after the overlay opens; only an armed overlay reacts to outside
/// pointer presses, so the press that opened it cannot also close it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    StartMenu {
        armed: bool,
    },
    ContextMenu {
        position: PointerPosition,
        armed: bool,
    },
}

impl OverlayState {
    pub fn is_start_menu_open(self) -> bool {
        matches!(self, Self::StartMenu { .. })
    }

    pub fn context_menu_position(self) -> Option<PointerPosition> {
        match self {
            Self::ContextMenu { position, .. } => Some(position),
            _ => None,
        }
    }

    pub fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn is_armed(self) -> bool {
        match self {
            Self::Closed => false,
            Self::StartMenu { armed } | Self::ContextMenu { armed, .. } => armed,
        }
    }

    pub fn armed(self) -> Self {
        match self {
            Self::Closed => Self::Closed,
            Self::StartMenu { .. } => Self::StartMenu { armed: true },
            Self::ContextMenu { position, .. } => Self::ContextMenu {
                position,
                armed: true,
            },
        }
    }
}

/// Authoritative desktop state: open windows, focus, stacking counter, and the active overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopState {
    pub windows: WindowStore,
    pub focused_id: Option<AppId>,
    pub top_z_index: u32,
    pub overlay: OverlayState,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: WindowStore::default(),
            focused_id: None,
            top_z_index: BASE_Z_INDEX,
            overlay: OverlayState::Closed,
        }
    }
}

impl DesktopState {
    pub fn window(&self, id: &AppId) -> Option<&WindowRecord> {
        self.windows.get(id)
    }

    pub fn is_focused(&self, id: &AppId) -> bool {
        self.focused_id.as_ref() == Some(id)
    }

    /// Ids of windows that take part in layout, i.e. every non-minimized window.
    pub fn rendered_window_ids(&self) -> Vec<AppId> {
        self.windows
            .iter()
            .filter(|w| !w.is_minimized)
            .map(|w| w.id.clone())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        ResizeEdge::North,
        ResizeEdge::South,
        ResizeEdge::East,
        ResizeEdge::West,
        ResizeEdge::NorthEast,
        ResizeEdge::NorthWest,
        ResizeEdge::SouthEast,
        ResizeEdge::SouthWest,
    ];

    pub fn has_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub fn has_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    pub fn has_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub fn has_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    /// Whether dragging this handle can move the window origin.
    pub fn moves_origin(self) -> bool {
        self.has_north() || self.has_west()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(id: &str) -> WindowRecord {
        WindowRecord {
            id: AppId::from(id),
            title: id.to_string(),
            icon: String::new(),
            position: WindowPosition::default(),
            size: WindowSize::default(),
            z_index: 0,
            is_minimized: false,
            is_maximized: false,
        }
    }

    #[test]
    fn store_keeps_open_order_and_rejects_duplicates() {
        let mut store = WindowStore::default();
        assert!(store.insert(record("b")));
        assert!(store.insert(record("a")));
        assert!(!store.insert(record("b")));

        let ids: Vec<_> = store.iter().map(|w| w.id.as_str().to_string()).collect();
        assert_eq!(ids, vec!["b".to_string(), "a".to_string()]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn store_mutation_does_not_leak_into_cloned_snapshot() {
        let mut store = WindowStore::default();
        store.insert(record("about"));
        let snapshot = store.clone();

        store.get_mut(&AppId::from("about")).unwrap().position = WindowPosition { x: 7, y: 9 };

        assert_eq!(
            snapshot.get(&AppId::from("about")).unwrap().position,
            WindowPosition::default()
        );
        assert_eq!(
            store.get(&AppId::from("about")).unwrap().position,
            WindowPosition { x: 7, y: 9 }
        );
    }

    #[test]
    fn store_remove_drops_id_from_order() {
        let mut store = WindowStore::default();
        store.insert(record("a"));
        store.insert(record("b"));

        assert!(store.remove(&AppId::from("a")).is_some());
        assert!(store.remove(&AppId::from("a")).is_none());
        assert_eq!(store.ids(), vec![AppId::from("b")]);
    }

    #[test]
    fn corner_edges_compose_cardinal_directions() {
        assert!(ResizeEdge::NorthWest.has_north() && ResizeEdge::NorthWest.has_west());
        assert!(ResizeEdge::SouthEast.has_south() && ResizeEdge::SouthEast.has_east());
        assert!(!ResizeEdge::SouthEast.moves_origin());
        assert!(ResizeEdge::NorthEast.moves_origin());
    }

    #[test]
    fn overlay_arming_preserves_kind() {
        let position = PointerPosition { x: 4, y: 5 };
        let menu = OverlayState::ContextMenu {
            position,
            armed: false,
        };
        assert!(!menu.is_armed());
        assert_eq!(
            menu.armed(),
            OverlayState::ContextMenu {
                position,
                armed: true
            }
        );
        assert_eq!(OverlayState::Closed.armed(), OverlayState::Closed);
    }
}
