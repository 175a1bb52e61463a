mod book;
mod sale;

pub use self::{book::*, sale::*};
