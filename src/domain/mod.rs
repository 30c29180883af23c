pub mod entities;
pub mod listview;
