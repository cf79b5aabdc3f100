pub mod name;
pub mod phone;
pub mod record;

pub use name::Name;
pub use phone::{is_valid_phone, Phone};
pub use record::Record;
