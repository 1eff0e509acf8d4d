pub mod story_result_repository;

pub use story_result_repository::JsonStoryResultRepository;
