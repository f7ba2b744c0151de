pub mod question;
pub mod topic_list;
