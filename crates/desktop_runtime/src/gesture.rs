//! Press/move/release gesture plumbing shared by the drag and resize controllers.
//!
//! A gesture owns document-wide listeners for its lifetime only. The listeners resolve the
//! dispatch callback through [`LatestCallback`] each time an event arrives, so a callback swapped
//! in after the press is the one that receives the move.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::drag::DragSession;
use crate::model::{AppId, PointerPosition};
use crate::reducer::DesktopAction;
use crate::resize::ResizeSession;
use crate::window_mode::GestureKind;

/// Shared cell holding the most recent callback.
pub struct LatestCallback<T: 'static> {
    slot: Rc<RefCell<Rc<dyn Fn(T)>>>,
}

impl<T: 'static> Clone for LatestCallback<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T: 'static> LatestCallback<T> {
    pub fn new(callback: impl Fn(T) + 'static) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Rc::new(callback))),
        }
    }

    pub fn replace(&self, callback: impl Fn(T) + 'static) {
        *self.slot.borrow_mut() = Rc::new(callback);
    }

    /// Calls whatever callback is current right now. The cell is not borrowed during the call, so
    /// the callback may itself replace the cell's contents.
    pub fn call(&self, value: T) {
        let callback = Rc::clone(&self.slot.borrow());
        callback(value);
    }
}

/// Teardown handles for the listeners attached on press. Dropping detaches them.
#[derive(Default)]
pub struct GestureSubscription {
    teardown: Vec<Box<dyn FnOnce()>>,
}

impl GestureSubscription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, detach: impl FnOnce() + 'static) {
        self.teardown.push(Box::new(detach));
    }
}

impl fmt::Debug for GestureSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureSubscription")
            .field("listeners", &self.teardown.len())
            .finish()
    }
}

impl Drop for GestureSubscription {
    fn drop(&mut self) {
        for detach in self.teardown.drain(..) {
            detach();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveGesture {
    Drag(DragSession),
    Resize(ResizeSession),
}

impl ActiveGesture {
    pub fn window_id(&self) -> &AppId {
        match self {
            Self::Drag(session) => &session.window_id,
            Self::Resize(session) => &session.window_id,
        }
    }

    pub fn kind(&self) -> GestureKind {
        match self {
            Self::Drag(_) => GestureKind::Dragging,
            Self::Resize(_) => GestureKind::Resizing,
        }
    }

    pub fn pointer_moved(&self, pointer: PointerPosition) -> DesktopAction {
        match self {
            Self::Drag(session) => session.pointer_moved(pointer),
            Self::Resize(session) => session.pointer_moved(pointer),
        }
    }
}

struct ControllerInner {
    active: RefCell<Option<ActiveGesture>>,
    subscription: RefCell<Option<GestureSubscription>>,
    dispatch: LatestCallback<DesktopAction>,
}

/// Per-window gesture state: at most one live gesture plus its listener subscription.
///
/// Cheap to clone; clones share state so the listeners installed on press can reach it.
#[derive(Clone)]
pub struct GestureController {
    inner: Rc<ControllerInner>,
}

impl GestureController {
    pub fn new(dispatch: LatestCallback<DesktopAction>) -> Self {
        Self {
            inner: Rc::new(ControllerInner {
                active: RefCell::new(None),
                subscription: RefCell::new(None),
                dispatch,
            }),
        }
    }

    /// Starts a gesture and raises its window. Any gesture still live is released first.
    pub fn press(&self, gesture: ActiveGesture, subscription: GestureSubscription) {
        self.release();
        let focus = DesktopAction::FocusWindow {
            window_id: gesture.window_id().clone(),
        };
        *self.inner.active.borrow_mut() = Some(gesture);
        *self.inner.subscription.borrow_mut() = Some(subscription);
        self.inner.dispatch.call(focus);
    }

    /// Dispatches the live gesture's command for `pointer`. Ignored when no gesture is live.
    pub fn pointer_moved(&self, pointer: PointerPosition) {
        let action = self
            .inner
            .active
            .borrow()
            .as_ref()
            .map(|gesture| gesture.pointer_moved(pointer));
        if let Some(action) = action {
            self.inner.dispatch.call(action);
        }
    }

    /// Ends the live gesture and detaches its listeners. Returns whether a gesture was live.
    pub fn release(&self) -> bool {
        let was_active = self.inner.active.borrow_mut().take().is_some();
        let subscription = self.inner.subscription.borrow_mut().take();
        drop(subscription);
        was_active
    }

    pub fn active_kind(&self) -> Option<GestureKind> {
        self.inner.active.borrow().as_ref().map(ActiveGesture::kind)
    }
}
