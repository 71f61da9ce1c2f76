#![forbid(unsafe_code)]

pub mod error;
pub mod generation;
pub mod model;
pub mod navigation;
pub mod progress;
pub mod source;
pub mod store;
pub mod time;

pub use error::StoreError;
pub use generation::{GenerationCounter, GenerationTicket};
pub use navigation::{
    NavPayload, PayloadSlot, Route, SUCCESS_REDIRECT_DELAY, Screen, ScreenData, ScreenDescriptor,
    derive_screen, reachable,
};
pub use progress::{Progress, ProgressAction};
pub use source::GenerationSource;
pub use store::SessionStore;
pub use time::Clock;
