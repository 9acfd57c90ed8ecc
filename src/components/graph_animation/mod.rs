//! Animated graph shown in the page margin.
//!
//! Templates from [`catalog`] are materialized into render state by
//! [`layout`], rotated on randomized timers by [`rotation`], eased between by
//! [`motion`], and described on hover or focus by [`tooltip`].

pub mod catalog;
mod component;
pub mod layout;
pub mod motion;
pub mod rotation;
mod timers;
pub mod tooltip;

pub use component::GraphAnimation;
pub use rotation::TemplateStore;
