pub mod backup;
pub mod builder;
pub(crate) mod fs_utils;
pub mod log;
pub mod menu;
pub mod registry;
pub mod roster;
pub mod session;
