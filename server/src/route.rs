mod book;
mod purchase;
mod sale;
mod status;

pub use self::{book::*, purchase::*, sale::*, status::*};
