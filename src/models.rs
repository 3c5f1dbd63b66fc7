//! Data types shown by the medicine list.

pub mod days;
pub mod medicine;

pub use days::DaysOfWeek;
pub use medicine::Medicine;
