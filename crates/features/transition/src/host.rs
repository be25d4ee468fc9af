//! Seams between the sequencer and the environment hosting the page.
//!
//! A host provides a [`Document`] to resolve regions and a [`Timer`] to
//! suspend on. Futures are not required to be `Send`: the browser event loop
//! is single threaded and its futures never leave it.

use crate::error::TransitionError;
use splash_domain::RegionId;
use std::future::Future;
use std::time::Duration;

/// A page region the sequencer may restyle.
pub trait Region {
    /// Identifier the region was resolved with.
    fn id(&self) -> &RegionId;

    /// Adds `class` to the region's class list. Adding a present class is a no-op.
    ///
    /// # Errors
    /// Returns [`TransitionError::Dom`] if the host rejects the mutation.
    fn add_class(&self, class: &str) -> Result<(), TransitionError>;

    /// Sets the region's inline `display` property.
    ///
    /// # Errors
    /// Returns [`TransitionError::Dom`] if the host rejects the mutation.
    fn set_display(&self, value: &str) -> Result<(), TransitionError>;
}

/// The document owning the regions. Lookups borrow, they never take ownership.
pub trait Document {
    type Region: Region;

    /// Resolves a region by its stable identifier.
    fn find(&self, id: &RegionId) -> Option<Self::Region>;
}

/// Non-blocking suspension provider.
pub trait Timer {
    /// Completes once `duration` has elapsed, yielding to the host scheduler meanwhile.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

impl<D: Document> Document for &D {
    type Region = D::Region;

    fn find(&self, id: &RegionId) -> Option<Self::Region> {
        (**self).find(id)
    }
}

impl<T: Timer> Timer for &T {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        (**self).sleep(duration)
    }
}
