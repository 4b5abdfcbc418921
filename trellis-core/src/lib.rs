//! Trellis core library — fragment/template domain types and view layout config.
//!
//! - [`types`] — [`FragmentRole`], [`Fragment`], [`TemplateName`], [`NamingRule`]
//! - [`layout`] — [`ViewLayout`]: where fragments live and how they are named
//! - [`error`] — [`LayoutError`]

pub mod error;
pub mod layout;
pub mod types;

pub use error::LayoutError;
pub use layout::ViewLayout;
pub use types::{Fragment, FragmentRole, NamingRule, TemplateName};
