pub mod import;
pub mod list;
pub mod mutation;
pub mod validate;
