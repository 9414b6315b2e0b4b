pub mod about;
pub mod activities;
pub mod app;
pub mod back_to_top;
pub mod contact_form;
pub mod gallery_viewer;
pub mod hero;
pub mod image_viewer;
pub mod modal;
pub mod navbar;
pub mod projects;
pub mod reveal;
pub mod skills;
pub mod zoom_controls;
