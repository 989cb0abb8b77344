pub mod controls;
pub mod popup;
