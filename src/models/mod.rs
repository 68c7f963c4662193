pub mod draft;
pub mod loaders;
pub mod question;
pub mod section;
pub mod seed;
pub mod submission;
pub mod user;

pub use draft::{QuestionDraft, UserDraft};
pub use loaders::{load_seed, load_seed_file};
pub use question::{ChoiceFields, CodingFields, IoPair, Question, QuestionBody};
pub use section::Section;
pub use seed::SeedData;
pub use submission::ExamSubmission;
pub use user::User;
