//! Shared types for side effect handlers.

use std::sync::Arc;

use opsdash_client::OpsClient;

/// Client handle shared across handler tasks.
///
/// `OpsClient` methods take `&self`, so no lock is needed.
pub type SharedClient = Arc<OpsClient>;
