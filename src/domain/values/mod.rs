pub mod time_frame;
pub mod topic_set;
pub mod trend_tab;
