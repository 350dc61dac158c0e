pub mod admin;
pub mod info;
pub mod mine;
pub mod research;
pub mod stake;
