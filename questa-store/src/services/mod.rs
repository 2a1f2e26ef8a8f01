pub mod quiz_service;
pub mod response_service;

pub use quiz_service::QuizService;
pub use response_service::ResponseService;
