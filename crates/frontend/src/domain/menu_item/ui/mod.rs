pub mod admin;
pub mod card;
pub mod daily;
