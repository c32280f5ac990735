pub mod entities;
pub mod errors;
pub mod plist;
pub mod value_objects;
