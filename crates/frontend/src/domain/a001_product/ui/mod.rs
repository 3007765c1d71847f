pub mod catalog;
pub mod components;
