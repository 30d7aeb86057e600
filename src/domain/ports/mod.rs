pub mod clock;
pub mod link_checker;
pub mod research_provider;
