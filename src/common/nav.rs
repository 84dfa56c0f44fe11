use crate::router::routes::RouteTarget;

/// Sink for forced navigation. The HTTP client adapter and the session store
/// push redirects through this seam instead of owning a routing surface:
/// the embedding application supplies the implementation that actually moves
/// the view layer.
pub trait Navigator: Send + Sync {
    fn navigate(&self, target: RouteTarget);
}
