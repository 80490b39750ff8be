pub use cursor::Cursor;
pub use indexed::Indexed;

pub mod alphabet;
mod cursor;
mod indexed;
pub mod pretty;
