use crate::error::Result;
use crate::scene::InteractionEvent;

/// Receives pointer/tap events that the platform has already resolved to a
/// scene target.
pub trait InteractionHandler {
    /// Apply one interaction
    fn handle(&mut self, event: InteractionEvent) -> Result<()>;

    /// Apply a batch in order, stopping at the first error
    fn handle_all<I>(&mut self, events: I) -> Result<()>
    where
        I: IntoIterator<Item = InteractionEvent>,
        Self: Sized,
    {
        for event in events {
            self.handle(event)?;
        }
        Ok(())
    }
}
