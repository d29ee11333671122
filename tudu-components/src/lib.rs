//! Reusable UI components for tudu applications
//!
//! Components here are pure in the tudu-core sense: props carry the data,
//! `handle_event` emits actions, `render` draws. Only view-local state
//! (scroll offset, cursor column) lives inside the component.

pub mod check_list;
pub mod filter_tabs;
pub mod text_input;

pub use check_list::{CheckEntry, CheckList, CheckListProps};
pub use filter_tabs::{FilterTabs, FilterTabsProps};
pub use text_input::{TextInput, TextInputProps};
