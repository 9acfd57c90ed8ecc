pub mod about_me;
pub mod home;
pub mod how_you_can_help;
pub mod latest_updates;
pub mod not_found;
pub mod reading_materials;
