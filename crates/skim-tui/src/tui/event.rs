use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Terminal events
#[derive(Clone, Debug)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Error occurred while reading input
    Error(String),
}

/// Event handler managing terminal input
///
/// Input is read on a task of the current runtime and delivered in order;
/// the caller handles each event to completion before asking for the next.
pub struct EventHandler {
    /// Event receiver
    receiver: mpsc::UnboundedReceiver<Event>,
    /// Cancellation token for graceful shutdown
    cancel: CancellationToken,
}

impl EventHandler {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        {
            let cancel = cancel.clone();

            tokio::spawn(async move {
                let mut reader = EventStream::new();

                loop {
                    tokio::select! {
                        _ = cancel.cancelled() => break,

                        maybe_event = reader.next() => {
                            let event = match maybe_event {
                                Some(Ok(CrosstermEvent::Key(key))) => {
                                    // Filter out release events (important for Windows)
                                    if key.kind != KeyEventKind::Press {
                                        continue;
                                    }
                                    Event::Key(key)
                                }
                                Some(Ok(CrosstermEvent::Resize(w, h))) => Event::Resize(w, h),
                                Some(Ok(_)) => continue,
                                Some(Err(e)) => Event::Error(e.to_string()),
                                None => break,
                            };

                            if sender.send(event).is_err() {
                                break;
                            }
                        }
                    }
                }
            });
        }

        Self { receiver, cancel }
    }

    /// Receive the next event
    pub async fn next(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }

    /// Shutdown the event handler
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
