pub mod report_item;
pub mod report_result;
