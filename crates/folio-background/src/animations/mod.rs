pub mod cursor;
pub mod particles;
pub mod stateless;
