pub mod footer;
pub mod new_variant;
pub mod select;
