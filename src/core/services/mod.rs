//! Stateless builders that turn ledger transactions into derived series.
//!
//! Every function here returns a freshly allocated series and never mutates its
//! inputs, so callers may re-run them on each parameter change. A running
//! total that leaves the `Decimal` range comes back as `StoryError::Overflow`.

pub mod counterfactual_service;
pub mod locator_service;
pub mod projection_service;
pub mod series_service;
pub mod spending_service;

pub use counterfactual_service::{CounterfactualService, ExclusionOutcome, SplitOutcome};
pub use locator_service::{EventLocator, EventLookup};
pub use projection_service::{ProjectionService, PROJECTION_DAY};
pub use series_service::SeriesService;
pub use spending_service::SpendingService;

#[cfg(test)]
mod tests;
