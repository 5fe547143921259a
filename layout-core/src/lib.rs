//! Responsive behaviour for server-rendered pages, independent of any browser.
//!
//! [`ResponsiveController`] owns the UI state (viewport bucket, mobile menu,
//! table bindings, touch capability, resize debounce) and mutates the page
//! only through a [`Dom`]. Hosts feed it [`Command`]s and run the returned
//! [`Effect`]s.

pub mod config;
pub mod controller;
pub mod debounce;
pub mod dom;
pub mod form;
pub mod memory;
pub mod menu;
pub mod selector;
pub mod stylesheet;
pub mod table;
pub mod touch;
pub mod viewport;

pub use config::{ConfigError, ResponsiveConfig, Selectors};
pub use controller::{
    Command, Effect, ResponsiveController, REVEALED_CLASS, REVEAL_PENDING_CLASS,
};
pub use debounce::Debounce;
pub use dom::{Dom, DomError, EventKind};
pub use memory::{MemoryDom, NodeId};
pub use menu::{MenuInput, MenuState, MenuTransition};
pub use selector::{Selector, SelectorError};
pub use table::{TableBinding, TableRegistry};
pub use touch::{TouchCapability, TouchSignals};
pub use viewport::{classify, Breakpoints, ViewportClass};
