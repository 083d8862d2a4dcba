pub mod comparison;
pub mod home;
pub mod miller_demo;
pub mod not_found;
