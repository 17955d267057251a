use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use tokio::runtime::Handle;
use tracing::debug;

use super::{LocationService, NameValidator, ServiceError};
use crate::model::ValidationTicket;

/// A service result delivered back to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Result of the one-time location fetch.
    Locations(Result<Vec<String>, ServiceError>),
    /// Result of validating `ticket.name()`.
    NameValidity {
        ticket: ValidationTicket,
        result: Result<bool, ServiceError>,
    },
}

/// Issues fire-and-forget service requests and queues their results.
///
/// Requests run on the tokio runtime behind `handle`; results are read with
/// [`Dispatcher::try_next`] from the thread that owns the form state, in the
/// order they arrived. There are no timeouts, retries or cancellation.
pub struct Dispatcher {
    handle: Handle,
    validator: Arc<dyn NameValidator>,
    locations: Arc<dyn LocationService>,
    tx: Sender<Resolution>,
    rx: Receiver<Resolution>,
}

impl Dispatcher {
    /// Creates a dispatcher spawning onto `handle`.
    pub fn new(
        handle: Handle,
        validator: Arc<dyn NameValidator>,
        locations: Arc<dyn LocationService>,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            handle,
            validator,
            locations,
            tx,
            rx,
        }
    }

    /// Requests the location list.
    pub fn fetch_locations(&self) {
        let service = Arc::clone(&self.locations);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = service.locations().await;
            deliver(&tx, Resolution::Locations(result));
        });
    }

    /// Requests validation of the name carried by `ticket`.
    pub fn validate_name(&self, ticket: ValidationTicket) {
        let service = Arc::clone(&self.validator);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = service.is_name_valid(ticket.name()).await;
            deliver(&tx, Resolution::NameValidity { ticket, result });
        });
    }

    /// Returns the next queued result without blocking.
    pub fn try_next(&self) -> Option<Resolution> {
        self.rx.try_recv().ok()
    }

    /// Waits up to `timeout` for the next result.
    pub fn next_timeout(&self, timeout: Duration) -> Option<Resolution> {
        self.rx.recv_timeout(timeout).ok()
    }
}

fn deliver(tx: &Sender<Resolution>, resolution: Resolution) {
    if tx.send(resolution).is_err() {
        debug!("dispatcher dropped before resolution arrived");
    }
}
