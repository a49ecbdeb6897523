#[macro_use] extern crate log;
extern crate simplelog;

pub mod skiplist;
pub mod entry;
pub mod errors;
pub mod options;
pub mod logger;
mod util;

pub use crate::entry::{Dated, Event};
pub use crate::errors::{Error, Result};
pub use crate::options::EventListOptions;
pub use crate::skiplist::EventList;
