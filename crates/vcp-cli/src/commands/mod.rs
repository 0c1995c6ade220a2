pub mod chain;
pub mod hash;
pub mod merkle;
