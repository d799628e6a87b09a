//! Footer navigation models.
//!
//! A [`NavItem`] wraps one [`NavEntry`] and keeps its `active` flag in step
//! with the bus: on every `nav` event it sets `active` to whether its target
//! is the published page. Views learn about changes through
//! [`ActiveTrackable::on_active_changed`]; a listener runs once per actual
//! change of the flag, never for a no-op update.
//!
//! ```
//! use page_navigator::{BusEvent, EventBus, NavItemList, PageName};
//! use std::rc::Rc;
//!
//! let bus = Rc::new(EventBus::new());
//! let list = NavItemList::standard(&bus).unwrap();
//! bus.publish(BusEvent::Nav, &PageName::Views);
//!
//! assert_eq!(list.active_target(), Some(PageName::Views));
//! assert_eq!(list.active_items().len(), 1);
//! ```

use crate::error::Result;
use crate::event_bus::{BusEvent, EventBus, ListenerId};
use crate::page::{check_coverage, PageName};
use crate::trace_log;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// One footer link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub title: String,
    pub target: PageName,
    pub active: bool,
}

impl NavEntry {
    /// An inactive entry.
    pub fn new(title: impl Into<String>, target: PageName) -> Self {
        Self {
            title: title.into(),
            target,
            active: false,
        }
    }
}

/// Callback run after a model's active flag changed.
pub type ActiveChangedHandler = Rc<dyn Fn(&NavEntry)>;

/// Token returned by [`ActiveTrackable::on_active_changed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveListener(u64);

/// Something with an observable active flag.
pub trait ActiveTrackable {
    /// Current value of the flag.
    fn is_active(&self) -> bool;

    /// Set the flag. Listeners run only if the value changed; the return
    /// value says whether it did.
    fn set_active(&self, active: bool) -> bool;

    /// Register a listener for changes of the flag.
    fn on_active_changed(&self, handler: ActiveChangedHandler) -> ActiveListener;

    /// Remove a listener. Returns `false` if it was already gone.
    fn off_active_changed(&self, listener: ActiveListener) -> bool;
}

struct NavItemInner {
    entry: RefCell<NavEntry>,
    listeners: RefCell<Vec<(ActiveListener, ActiveChangedHandler)>>,
    next_listener: Cell<u64>,
    owner: ListenerId,
    bus: Weak<EventBus>,
}

impl Drop for NavItemInner {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.unsubscribe_owner(self.owner);
        }
    }
}

/// Shared handle to a nav model.
#[derive(Clone)]
pub struct NavItem {
    inner: Rc<NavItemInner>,
}

impl NavItem {
    /// Create an item and subscribe it to `nav` on `bus`.
    ///
    /// The bus holds only a weak reference to the item. Dropping the last
    /// handle removes the subscription.
    pub fn new(title: impl Into<String>, target: PageName, bus: &Rc<EventBus>) -> Self {
        let item = Self {
            inner: Rc::new(NavItemInner {
                entry: RefCell::new(NavEntry::new(title, target)),
                listeners: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
                owner: bus.new_listener(),
                bus: Rc::downgrade(bus),
            }),
        };

        let weak: Weak<NavItemInner> = Rc::downgrade(&item.inner);
        bus.subscribe(BusEvent::Nav, item.inner.owner, move |page| {
            if let Some(inner) = weak.upgrade() {
                NavItem { inner }.toggle_active(*page);
            }
        });
        item
    }

    /// Snapshot of the entry.
    pub fn entry(&self) -> NavEntry {
        self.inner.entry.borrow().clone()
    }

    /// Link title.
    pub fn title(&self) -> String {
        self.inner.entry.borrow().title.clone()
    }

    /// Page this item links to.
    pub fn target(&self) -> PageName {
        self.inner.entry.borrow().target
    }

    /// Identity of this item's bus subscription.
    pub fn owner(&self) -> ListenerId {
        self.inner.owner
    }

    /// Recompute the flag for a published page.
    pub fn toggle_active(&self, published: PageName) {
        self.set_active(self.target() == published);
    }
}

impl ActiveTrackable for NavItem {
    fn is_active(&self) -> bool {
        self.inner.entry.borrow().active
    }

    fn set_active(&self, active: bool) -> bool {
        let entry = {
            let mut entry = self.inner.entry.borrow_mut();
            if entry.active == active {
                return false;
            }
            entry.active = active;
            entry.clone()
        };

        let handlers: Vec<ActiveChangedHandler> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        trace_log!(
            "Nav item '{}' active -> {} ({} listener(s))",
            entry.target,
            active,
            handlers.len()
        );
        for handler in handlers {
            handler(&entry);
        }
        true
    }

    fn on_active_changed(&self, handler: ActiveChangedHandler) -> ActiveListener {
        let id = ActiveListener(self.inner.next_listener.get());
        self.inner.next_listener.set(id.0 + 1);
        self.inner.listeners.borrow_mut().push((id, handler));
        id
    }

    fn off_active_changed(&self, listener: ActiveListener) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(id, _)| *id != listener);
        listeners.len() != before
    }
}

impl std::fmt::Debug for NavItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavItem")
            .field("entry", &*self.inner.entry.borrow())
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish()
    }
}

/// The footer's ordered list of items.
#[derive(Debug, Clone)]
pub struct NavItemList {
    items: Vec<NavItem>,
}

impl NavItemList {
    /// Titles and targets of the footer links, in display order.
    pub const STANDARD_ENTRIES: [(&'static str, PageName); 5] = [
        ("Home", PageName::Home),
        ("1: Set-up", PageName::Setup),
        ("2: Views", PageName::Views),
        ("3: Models", PageName::Models),
        ("4: Events", PageName::Events),
    ];

    /// The application's footer links.
    pub fn standard(bus: &Rc<EventBus>) -> Result<Self> {
        Self::from_entries(bus, Self::STANDARD_ENTRIES)
    }

    /// Build a list, rejecting it unless every page has a link.
    pub fn from_entries<S: Into<String>>(
        bus: &Rc<EventBus>,
        entries: impl IntoIterator<Item = (S, PageName)>,
    ) -> Result<Self> {
        let items: Vec<NavItem> = entries
            .into_iter()
            .map(|(title, target)| NavItem::new(title, target, bus))
            .collect();
        let list = Self { items };
        if let Err(err) = check_coverage("nav entry list", list.iter().map(NavItem::target)) {
            list.detach(bus);
            return Err(err);
        }
        Ok(list)
    }

    /// Items in display order.
    pub fn iter(&self) -> impl Iterator<Item = &NavItem> {
        self.items.iter()
    }

    /// Item at a position.
    pub fn get(&self, index: usize) -> Option<&NavItem> {
        self.items.get(index)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items whose flag is set.
    pub fn active_items(&self) -> Vec<&NavItem> {
        self.items.iter().filter(|item| item.is_active()).collect()
    }

    /// Target of the first active item.
    pub fn active_target(&self) -> Option<PageName> {
        self.items
            .iter()
            .find(|item| item.is_active())
            .map(NavItem::target)
    }

    /// Drop every item's bus subscription.
    pub fn detach(&self, bus: &EventBus) {
        for item in &self.items {
            bus.unsubscribe_owner(item.owner());
        }
    }
}
