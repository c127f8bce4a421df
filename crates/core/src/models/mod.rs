pub mod booking;
pub mod envelope;
pub mod slot;
