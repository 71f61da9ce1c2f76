mod chat_vm;
mod dashboard_vm;
mod flashcard_vm;
mod markdown_vm;
mod notebook_vm;
mod quiz_vm;
mod time_fmt;

pub use chat_vm::{ChatMessageVm, map_chat};
pub use dashboard_vm::{
    DashboardVm, HistoryItemVm, ProfileVm, SavedSnippetVm, map_dashboard, map_history,
};
pub use flashcard_vm::{FlashcardScreenVm, map_flashcard_screen};
pub use markdown_vm::{markdown_to_html, preview, sanitize_html};
pub use notebook_vm::{NoteOrigin, NoteVm, NotebookState};
pub use quiz_vm::{QuizScreenVm, ReviewRowVm, map_quiz_screen};
pub use time_fmt::{format_clock, format_date};
