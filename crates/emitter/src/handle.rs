//! Handle - identity of one subscription

use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::emitter::EventEmitter;
use crate::listener::Listener;
use crate::once::OneShot;

/// What a handle invokes
pub(crate) enum Subscription {
    /// Runs on every emission until unsubscribed
    Plain(Box<dyn Listener>),
    /// Removes itself, then runs once
    Once(OneShot),
}

/// Registration token returned by `subscribe`, `on` and `once`.
///
/// Handles compare by identity: two handles are equal only when one is a
/// clone of the other. Wrapping the same logic twice yields two distinct
/// handles that are removed independently.
#[derive(Clone)]
pub struct Handle(Rc<Subscription>);

impl Handle {
    /// Wrap a listener in a new handle
    pub fn new<L: Listener + 'static>(listener: L) -> Self {
        Self(Rc::new(Subscription::Plain(Box::new(listener))))
    }

    /// Wrap a closure in a new handle
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&EventEmitter, &[Value]) -> anyhow::Result<()> + 'static,
    {
        Self::new(f)
    }

    pub(crate) fn one_shot(one_shot: OneShot) -> Self {
        Self(Rc::new(Subscription::Once(one_shot)))
    }

    /// True for handles created by `once`
    pub fn is_once(&self) -> bool {
        matches!(*self.0, Subscription::Once(_))
    }

    /// Event a one-shot handle removes itself from
    pub fn once_event(&self) -> Option<&str> {
        match &*self.0 {
            Subscription::Plain(_) => None,
            Subscription::Once(one_shot) => Some(one_shot.event()),
        }
    }

    /// Run the subscription for one emission
    pub(crate) fn invoke(&self, emitter: &EventEmitter, args: &[Value]) -> anyhow::Result<()> {
        match &*self.0 {
            Subscription::Plain(listener) => listener.call(emitter, args),
            Subscription::Once(one_shot) => one_shot.fire(self, emitter, args),
        }
    }
}

impl PartialEq for Handle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Handle {}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("id", &Rc::as_ptr(&self.0))
            .field("once", &self.once_event())
            .finish()
    }
}
