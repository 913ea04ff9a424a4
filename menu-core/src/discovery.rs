use crate::screen::Screen;

/// Supplies every screen present in the current scope when the navigator starts.
///
/// Order is arbitrary but stays fixed for the session: it becomes the
/// registry order, the fallback start screen and the destroy order.
pub trait ScreenDiscovery {
    fn discover(&mut self) -> Vec<Screen>;
}

impl ScreenDiscovery for Vec<Screen> {
    fn discover(&mut self) -> Vec<Screen> {
        std::mem::take(self)
    }
}

/// Adapts a closure into a discovery source.
pub struct Discover<F>(pub F);

impl<F> ScreenDiscovery for Discover<F>
where
    F: FnMut() -> Vec<Screen>,
{
    fn discover(&mut self) -> Vec<Screen> {
        (self.0)()
    }
}
