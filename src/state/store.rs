//! Single-threaded reactive value with ordered subscribers.
//!
//! DESIGN
//! ======
//! A `Store` owns one value and an ordered subscriber list. Subscribing
//! replays the current value once; every `set`/`update` then notifies each
//! live subscriber in registration order before returning. Notification walks
//! a snapshot of the list, so subscribers may dispose themselves (or others)
//! or register new subscribers mid-notification without skipping anyone.
//!
//! Subscribers must not write back into the store they observe.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type Callback<T> = Rc<dyn Fn(&T)>;

struct Subscriber<T> {
    id: u64,
    active: Rc<Cell<bool>>,
    callback: Callback<T>,
}

struct Inner<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<Subscriber<T>>>,
    next_id: Cell<u64>,
}

/// Cancels a prior registration.
///
/// `dispose` is idempotent. Dropping a `Disposer` without calling `dispose`
/// leaves the registration in place for the rest of the session.
#[derive(Default)]
pub struct Disposer {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Disposer {
    /// Wrap a cancellation closure. It runs at most once.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Inert disposer for registrations that never happened.
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    /// One disposer that cancels every registration in `disposers`, in order.
    pub fn all(disposers: Vec<Disposer>) -> Self {
        Self::new(move || {
            for mut disposer in disposers {
                disposer.dispose();
            }
        })
    }

    pub fn dispose(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// `true` until `dispose` has been called (always `false` for `noop`).
    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }
}

impl fmt::Debug for Disposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disposer")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Writable reactive value. Clones share the same value and subscribers.
pub struct Store<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Replace the value and notify every subscriber.
    pub fn set(&self, value: T) {
        *self.inner.value.borrow_mut() = value;
        self.notify();
    }

    /// Derive the next value from the current one, store it, and return it.
    pub fn update(&self, f: impl FnOnce(&T) -> T) -> T {
        let next = f(&*self.inner.value.borrow());
        self.set(next.clone());
        next
    }

    /// Register `callback`, invoking it once right away with the current value.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Disposer {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        let active = Rc::new(Cell::new(true));
        let callback: Callback<T> = Rc::new(callback);
        self.inner.subscribers.borrow_mut().push(Subscriber {
            id,
            active: Rc::clone(&active),
            callback: Rc::clone(&callback),
        });

        let current = self.get();
        callback(&current);

        let weak = Rc::downgrade(&self.inner);
        Disposer::new(move || {
            active.set(false);
            if let Some(inner) = weak.upgrade() {
                inner.subscribers.borrow_mut().retain(|s| s.id != id);
            }
        })
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    /// Read-only view sharing this store's value and subscribers.
    pub fn readonly(&self) -> ReadableStore<T> {
        ReadableStore {
            store: self.clone(),
        }
    }

    fn notify(&self) {
        let snapshot: Vec<(Rc<Cell<bool>>, Callback<T>)> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|s| (Rc::clone(&s.active), Rc::clone(&s.callback)))
            .collect();
        let value = self.get();
        for (active, callback) in snapshot {
            if active.get() {
                callback(&value);
            }
        }
    }
}

/// Store view without mutation methods.
pub struct ReadableStore<T> {
    store: Store<T>,
}

impl<T> Clone for ReadableStore<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<T: Clone + 'static> ReadableStore<T> {
    pub fn get(&self) -> T {
        self.store.get()
    }

    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Disposer {
        self.store.subscribe(callback)
    }
}
