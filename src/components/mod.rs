pub mod check_results;
pub mod check_runner;
pub mod community_frame;
pub mod error_banner;
pub mod sidebar;
pub mod status_chip;
