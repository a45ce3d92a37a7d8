pub mod entities;
pub mod focus_trap;
pub mod listing;
pub mod seo;
pub mod toc;
pub mod use_cases;
pub mod view_counter;
