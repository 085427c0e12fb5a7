//! Pages
//!
//! One component per route.

mod about;
mod blogs;
mod careers;
mod contact;
mod home;
mod job_application;
mod not_found;
mod portfolio;
mod view_blog;

pub use about::About;
pub use blogs::Blogs;
pub use careers::Careers;
pub use contact::Contact;
pub use home::Home;
pub use job_application::JobApplication;
pub use not_found::NotFound;
pub use portfolio::Portfolio;
pub use view_blog::ViewBlog;
