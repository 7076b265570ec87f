mod question_splitter;
mod response_merger;
mod servfail;

pub use question_splitter::QuestionSplitter;
pub use response_merger::ResponseMerger;
pub use servfail::build_servfail;
