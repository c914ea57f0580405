pub mod about;
pub mod panels;
