pub mod link_checker;
