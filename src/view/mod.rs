//! View collaborators. A view only draws a [`Refresh`]; it never touches
//! the ledger, so any front end can be swapped in.

pub mod json;
pub mod terminal;

pub use json::JsonView;
pub use terminal::TerminalView;

use crate::core::Refresh;
use crate::errors::Result;

pub trait View {
    fn render(&mut self, refresh: &Refresh) -> Result<()>;
}

impl<V: View + ?Sized> View for Box<V> {
    fn render(&mut self, refresh: &Refresh) -> Result<()> {
        (**self).render(refresh)
    }
}
