//! Static configuration: animation tunables and site navigation.

pub mod animation;
pub mod navigation;

pub use animation::{AnimationConfig, MotionConfig, RotationConfig, SpringParams, TooltipConfig};
pub use navigation::{NavItem, SIDEBAR_ITEMS};
