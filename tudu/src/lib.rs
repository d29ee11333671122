//! tudu: a todo list for the terminal with Redux-style unidirectional state
//!
//! All data lives in one [`state::AppState`] owned by a store; the UI emits
//! [`action::Action`]s, pure reducers in [`reducer`] fold them into the next
//! state, and [`selector::visible_todos`] derives what the list shows. The
//! binary wires this to a ratatui front end.

pub mod action;
pub mod keymap;
pub mod reducer;
pub mod selector;
pub mod state;
pub mod ui;
