//! External collaborators: the name validator and the location service.
//!
//! Both are asynchronous. The [`Dispatcher`] runs requests on a tokio
//! runtime and hands the results back to the UI thread in arrival order.

mod dispatcher;
mod error;
mod mock;

use async_trait::async_trait;

pub use dispatcher::{Dispatcher, Resolution};
pub use error::ServiceError;
pub use mock::MockApi;

/// Decides whether a candidate name is acceptable.
#[async_trait]
pub trait NameValidator: Send + Sync {
    async fn is_name_valid(&self, name: &str) -> Result<bool, ServiceError>;
}

/// Supplies the ordered list of selectable locations.
#[async_trait]
pub trait LocationService: Send + Sync {
    async fn locations(&self) -> Result<Vec<String>, ServiceError>;
}
