pub mod active_section;

pub use active_section::use_active_section;
