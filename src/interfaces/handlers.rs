pub mod contact;
pub mod home;
pub mod pages;
pub mod system;
