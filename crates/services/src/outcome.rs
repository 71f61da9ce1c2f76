/// What happened to a generation result handed to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Backend payload accepted.
    Loaded { count: usize },
    /// Backend failed; the built-in payload was used instead.
    FellBack,
    /// The result belonged to a superseded request and was dropped.
    Ignored,
}
