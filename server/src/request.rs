mod book;
mod purchase;

pub use self::{book::*, purchase::*};
