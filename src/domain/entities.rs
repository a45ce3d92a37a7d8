pub mod contact;
pub mod page;
pub mod post;
pub mod profile;
pub mod project;
