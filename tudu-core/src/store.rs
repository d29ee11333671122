//! Centralized state store with a pure reducer pattern

use std::marker::PhantomData;

use crate::Action;

/// A pure reducer: computes the next state from the prior state and an action.
///
/// Reducers must not mutate their input; the store replaces its state
/// wholesale with the returned value on every dispatch. Unrecognized
/// actions should reduce to a value equal to the prior state.
pub type Reducer<S, A> = fn(&S, &A) -> S;

/// Handle returned by [`Store::subscribe`], used to remove the listener later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<S> = Box<dyn FnMut(&S)>;

/// Centralized state store with a Redux-like reducer pattern.
///
/// The store owns the application state and is the single point through
/// which it changes. Each [`dispatch`](Store::dispatch) runs the reducer,
/// swaps in the new state, and synchronously notifies every subscriber in
/// subscription order before returning. The store is single-threaded by
/// construction; all dispatches are serialized through whoever owns it.
///
/// # Type Parameters
/// * `S` - The application state type (`PartialEq` for change detection)
/// * `A` - The action type (must implement `Action`)
///
/// # Example
/// ```
/// use tudu_core::{Action, Store};
///
/// #[derive(Clone, Debug, PartialEq, Default)]
/// struct Counter {
///     value: i32,
/// }
///
/// #[derive(Clone, Debug)]
/// enum CounterAction {
///     Increment,
/// }
///
/// impl Action for CounterAction {
///     fn name(&self) -> &'static str {
///         "Increment"
///     }
/// }
///
/// fn reducer(state: &Counter, action: &CounterAction) -> Counter {
///     match action {
///         CounterAction::Increment => Counter {
///             value: state.value + 1,
///         },
///     }
/// }
///
/// let mut store = Store::new(Counter::default(), reducer);
/// let changed = store.dispatch(CounterAction::Increment);
/// assert!(changed);
/// assert_eq!(store.state().value, 1);
/// ```
pub struct Store<S, A: Action> {
    state: S,
    reducer: Reducer<S, A>,
    listeners: Vec<(SubscriptionId, Listener<S>)>,
    next_subscription: u64,
    _marker: PhantomData<A>,
}

impl<S: PartialEq, A: Action> Store<S, A> {
    /// Create a new store with an initial state and reducer.
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        Self {
            state,
            reducer,
            listeners: Vec::new(),
            next_subscription: 0,
            _marker: PhantomData,
        }
    }

    /// Get a reference to the current state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Dispatch an action to the store.
    ///
    /// Runs the reducer against the current state, replaces the state with
    /// the result, then notifies subscribers in subscription order. The
    /// whole sequence completes before `dispatch` returns.
    ///
    /// Returns `true` if the state changed and a re-render is needed.
    pub fn dispatch(&mut self, action: A) -> bool {
        let next = (self.reducer)(&self.state, &action);
        let changed = next != self.state;
        self.state = next;

        let state = &self.state;
        for (_, listener) in &mut self.listeners {
            listener(state);
        }

        changed
    }

    /// Register a listener invoked after every dispatch with the new state.
    ///
    /// Listeners run in subscription order. Returns an id to pass to
    /// [`unsubscribe`](Store::unsubscribe).
    pub fn subscribe(&mut self, listener: impl FnMut(&S) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a previously registered listener.
    ///
    /// Returns `false` if the id was unknown (e.g. already unsubscribed).
    /// Removal never disturbs the relative order of remaining listeners.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Number of currently registered listeners.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Middleware trait for intercepting actions.
///
/// Implement this to add logging or other cross-cutting concerns around
/// the reducer. Middleware sees the action before the reducer runs and the
/// change outcome after.
pub trait Middleware<A: Action> {
    /// Called before the action reaches the reducer.
    fn before(&mut self, action: &A);

    /// Called after the reducer has run.
    fn after(&mut self, action: &A, state_changed: bool);
}

/// A no-op middleware.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<A: Action> Middleware<A> for NoopMiddleware {
    fn before(&mut self, _action: &A) {}
    fn after(&mut self, _action: &A, _state_changed: bool) {}
}

/// Middleware that logs dispatched actions via `tracing`.
#[derive(Debug, Clone, Default)]
pub struct LoggingMiddleware {
    /// Whether to log before dispatch
    pub log_before: bool,
    /// Whether to log after dispatch
    pub log_after: bool,
}

impl LoggingMiddleware {
    /// Log after dispatch only.
    pub fn new() -> Self {
        Self {
            log_before: false,
            log_after: true,
        }
    }

    /// Log both before and after dispatch.
    pub fn verbose() -> Self {
        Self {
            log_before: true,
            log_after: true,
        }
    }
}

impl<A: Action> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        if self.log_before {
            tracing::debug!(action = %action.name(), "Dispatching action");
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        if self.log_after {
            tracing::debug!(
                action = %action.name(),
                state_changed = state_changed,
                "Action processed"
            );
        }
    }
}

/// Compose multiple middleware into one.
///
/// `before` hooks run in insertion order, `after` hooks in reverse order
/// for proper nesting.
pub struct ComposedMiddleware<A: Action> {
    middlewares: Vec<Box<dyn Middleware<A>>>,
}

impl<A: Action> std::fmt::Debug for ComposedMiddleware<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComposedMiddleware")
            .field("middlewares_count", &self.middlewares.len())
            .finish()
    }
}

impl<A: Action> Default for ComposedMiddleware<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Action> ComposedMiddleware<A> {
    /// Create an empty composition.
    pub fn new() -> Self {
        Self {
            middlewares: Vec::new(),
        }
    }

    /// Append a middleware to the composition.
    pub fn add<M: Middleware<A> + 'static>(&mut self, middleware: M) {
        self.middlewares.push(Box::new(middleware));
    }
}

impl<A: Action> Middleware<A> for ComposedMiddleware<A> {
    fn before(&mut self, action: &A) {
        for middleware in &mut self.middlewares {
            middleware.before(action);
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        for middleware in self.middlewares.iter_mut().rev() {
            middleware.after(action, state_changed);
        }
    }
}

/// Store with middleware support.
///
/// Wraps a [`Store`] and runs middleware hooks around every dispatch.
pub struct StoreWithMiddleware<S, A: Action, M: Middleware<A>> {
    store: Store<S, A>,
    middleware: M,
}

impl<S: PartialEq, A: Action, M: Middleware<A>> StoreWithMiddleware<S, A, M> {
    /// Create a new store with middleware.
    pub fn new(state: S, reducer: Reducer<S, A>, middleware: M) -> Self {
        Self {
            store: Store::new(state, reducer),
            middleware,
        }
    }

    /// Dispatch an action through middleware and store.
    pub fn dispatch(&mut self, action: A) -> bool {
        self.middleware.before(&action);
        let changed = self.store.dispatch(action.clone());
        self.middleware.after(&action, changed);
        changed
    }

    /// Get a reference to the current state.
    pub fn state(&self) -> &S {
        self.store.state()
    }

    /// Register a listener on the underlying store.
    pub fn subscribe(&mut self, listener: impl FnMut(&S) + 'static) -> SubscriptionId {
        self.store.subscribe(listener)
    }

    /// Remove a listener from the underlying store.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Get a reference to the middleware.
    pub fn middleware(&self) -> &M {
        &self.middleware
    }

    /// Get a mutable reference to the middleware.
    pub fn middleware_mut(&mut self) -> &mut M {
        &mut self.middleware
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Debug, PartialEq, Default)]
    struct TestState {
        counter: i32,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Decrement,
        NoOp,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Increment => "Increment",
                TestAction::Decrement => "Decrement",
                TestAction::NoOp => "NoOp",
            }
        }
    }

    fn test_reducer(state: &TestState, action: &TestAction) -> TestState {
        match action {
            TestAction::Increment => TestState {
                counter: state.counter + 1,
            },
            TestAction::Decrement => TestState {
                counter: state.counter - 1,
            },
            TestAction::NoOp => state.clone(),
        }
    }

    #[test]
    fn test_store_dispatch() {
        let mut store = Store::new(TestState::default(), test_reducer);

        assert!(store.dispatch(TestAction::Increment));
        assert_eq!(store.state().counter, 1);

        assert!(store.dispatch(TestAction::Increment));
        assert_eq!(store.state().counter, 2);

        assert!(store.dispatch(TestAction::Decrement));
        assert_eq!(store.state().counter, 1);
    }

    #[test]
    fn test_store_noop_reports_unchanged() {
        let mut store = Store::new(TestState::default(), test_reducer);

        assert!(!store.dispatch(TestAction::NoOp));
        assert_eq!(store.state().counter, 0);
    }

    #[test]
    fn test_subscribers_notified_in_order() {
        let mut store = Store::new(TestState::default(), test_reducer);
        let seen: Rc<RefCell<Vec<(&'static str, i32)>>> = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&seen);
        store.subscribe(move |state: &TestState| {
            first.borrow_mut().push(("first", state.counter));
        });
        let second = Rc::clone(&seen);
        store.subscribe(move |state: &TestState| {
            second.borrow_mut().push(("second", state.counter));
        });

        store.dispatch(TestAction::Increment);

        assert_eq!(&*seen.borrow(), &[("first", 1), ("second", 1)]);
    }

    #[test]
    fn test_subscribers_notified_even_when_unchanged() {
        let mut store = Store::new(TestState::default(), test_reducer);
        let calls = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&calls);
        store.subscribe(move |_: &TestState| {
            *counter.borrow_mut() += 1;
        });

        store.dispatch(TestAction::NoOp);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = Store::new(TestState::default(), test_reducer);
        let calls = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_: &TestState| {
            *counter.borrow_mut() += 1;
        });
        assert_eq!(store.subscriber_count(), 1);

        store.dispatch(TestAction::Increment);
        assert!(store.unsubscribe(id));
        store.dispatch(TestAction::Increment);

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(store.subscriber_count(), 0);
        assert!(!store.unsubscribe(id));
    }

    #[derive(Default)]
    struct CountingMiddleware {
        before_count: usize,
        after_count: usize,
        changed_count: usize,
    }

    impl<A: Action> Middleware<A> for CountingMiddleware {
        fn before(&mut self, _action: &A) {
            self.before_count += 1;
        }

        fn after(&mut self, _action: &A, state_changed: bool) {
            self.after_count += 1;
            if state_changed {
                self.changed_count += 1;
            }
        }
    }

    #[test]
    fn test_store_with_middleware() {
        let mut store = StoreWithMiddleware::new(
            TestState::default(),
            test_reducer,
            CountingMiddleware::default(),
        );

        store.dispatch(TestAction::Increment);
        store.dispatch(TestAction::NoOp);

        assert_eq!(store.middleware().before_count, 2);
        assert_eq!(store.middleware().after_count, 2);
        assert_eq!(store.middleware().changed_count, 1);
        assert_eq!(store.state().counter, 1);
    }
}
