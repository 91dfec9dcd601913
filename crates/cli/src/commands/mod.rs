pub mod generate;
pub mod slots;
pub mod validate;
