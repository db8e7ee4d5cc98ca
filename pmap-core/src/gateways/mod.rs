pub mod directory;
pub mod map;
