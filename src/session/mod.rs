pub mod drill;
pub mod feedback;
pub mod input;
pub mod result;
