pub mod auth;
pub mod question_bank;
pub mod submission_viewer;
pub mod user_directory;
pub mod validator;

pub use auth::{AuthGate, Credentials};
pub use question_bank::{EditState, QuestionBank};
pub use submission_viewer::SubmissionViewer;
pub use user_directory::{UserDirectory, SIGN_UP_NOTICE};
pub use validator::Validator;
