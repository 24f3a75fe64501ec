pub mod check;
pub mod community;
