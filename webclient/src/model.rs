mod atom;
mod course;
mod field;
mod problem;
mod problemset;
mod submission;
mod user;

pub use atom::*;
pub use course::*;
pub use field::Field;
pub use problem::*;
pub use problemset::*;
pub use submission::*;
pub use user::*;
