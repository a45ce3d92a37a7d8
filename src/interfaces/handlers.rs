pub mod blog_posts;
pub mod home;
pub mod json_error;
pub mod pages;
pub mod projects;
pub mod seo;
pub mod system;
