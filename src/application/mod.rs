pub mod generate_report;
pub mod normalize;
pub mod prompt;
pub mod render;
pub mod verify_links;
