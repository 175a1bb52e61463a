mod book;
mod purchase;
mod sale;

pub use self::{book::*, purchase::*, sale::*};
