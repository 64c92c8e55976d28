use crossterm::event::Event as TermEvent;

use super::activity::ActivityResult;

pub enum Event {
    Term(TermEvent),
    /// Delivered to the newly active activity after the one above it popped,
    /// carrying whatever result the popped activity returned.
    ActiveAfterPop(Option<ActivityResult>),
}
