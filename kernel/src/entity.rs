mod book;
mod common;
mod sale;

pub use self::{book::*, common::*, sale::*};
