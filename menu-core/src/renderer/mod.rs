pub mod terminal;

use crate::navigator::Navigator;

pub trait Renderer {
    fn render(&mut self, nav: &Navigator) -> std::io::Result<()>;
}
