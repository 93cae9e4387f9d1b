pub mod prayer;
pub mod topic;

pub use prayer::StoredPrayer;
pub use topic::TopicId;
