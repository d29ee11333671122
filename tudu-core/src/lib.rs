//! Core traits and types for tudu
//!
//! This crate provides the state-management plumbing the tudu application
//! is built on: a Redux-inspired unidirectional data flow for terminal
//! apps, where the store is the single owner of state and every change is
//! a dispatched action run through a pure reducer.
//!
//! # Core Concepts
//!
//! - **Action**: a value describing an intended state change
//! - **Store**: owns the state, applies the reducer, notifies subscribers
//! - **Component**: pure UI element rendering from props and emitting actions
//! - **Keymap**: context-aware key-to-command bindings
//!
//! # Basic Example
//!
//! ```
//! use tudu_core::{Action, Store};
//!
//! #[derive(Clone, Debug, PartialEq, Default)]
//! struct AppState {
//!     count: i32,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum AppAction {
//!     Bump,
//! }
//!
//! impl Action for AppAction {
//!     fn name(&self) -> &'static str {
//!         "Bump"
//!     }
//! }
//!
//! fn reducer(state: &AppState, action: &AppAction) -> AppState {
//!     match action {
//!         AppAction::Bump => AppState {
//!             count: state.count + 1,
//!         },
//!     }
//! }
//!
//! let mut store = Store::new(AppState::default(), reducer);
//! store.subscribe(|state| println!("count is now {}", state.count));
//! store.dispatch(AppAction::Bump);
//! assert_eq!(store.state().count, 1);
//! ```
//!
//! Reducers take the prior state by reference and return the next state;
//! the store replaces its state wholesale on every dispatch and notifies
//! subscribers in subscription order before `dispatch` returns. Everything
//! is synchronous and single-threaded: one dispatch is fully observed
//! before the next begins.

pub mod action;
pub mod bus;
pub mod component;
pub mod event;
pub mod keymap;
pub mod logger;
pub mod store;
pub mod testing;

// Core trait exports
pub use action::{Action, ActionSummary};
pub use component::Component;

// Event system exports
pub use bus::{process_raw_event, spawn_event_poller, RawEvent};
pub use event::{EventKind, EventType};

// Keymap exports
pub use keymap::{display_key, parse_key, BindingContext, Keymap};

// Store exports
pub use store::{
    ComposedMiddleware, LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store,
    StoreWithMiddleware, SubscriptionId,
};

// Action log exports
pub use logger::{ActionFilter, ActionLog, ActionLogEntry, ActionLoggerMiddleware};

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{Action, ActionSummary};
    pub use crate::bus::{process_raw_event, spawn_event_poller, RawEvent};
    pub use crate::component::Component;
    pub use crate::event::{EventKind, EventType};
    pub use crate::keymap::{display_key, parse_key, BindingContext, Keymap};
    pub use crate::logger::{ActionFilter, ActionLog, ActionLoggerMiddleware};
    pub use crate::store::{
        ComposedMiddleware, LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store,
        StoreWithMiddleware, SubscriptionId,
    };

    // Ratatui re-exports
    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
