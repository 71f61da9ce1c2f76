mod dashboard;
mod flashcards;
mod host;
mod landing;
mod not_found;
mod notebook;
mod quiz;
mod setup;
mod tutor;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::DashboardView;
pub use flashcards::FlashcardsView;
pub use host::ScreenHost;
pub use landing::LandingView;
pub use not_found::NotFoundView;
pub use notebook::NotebookView;
pub use quiz::QuizView;
pub use setup::SetupView;
pub use tutor::TutorView;
