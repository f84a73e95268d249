//! One component per route

pub mod about;
pub mod achievements;
pub mod contact;
pub mod experience;
pub mod home;
pub mod not_found;
pub mod projects;

pub use about::About;
pub use achievements::Achievements;
pub use contact::Contact;
pub use experience::Experience;
pub use home::Home;
pub use not_found::NotFound;
pub use projects::Projects;
