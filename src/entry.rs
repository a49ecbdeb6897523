/// Anything that can be filed in an [`EventList`](crate::skiplist::EventList)
/// by the year it happened.
pub trait Dated {
    fn year(&self) -> i32;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub year: i32,
    pub description: String,
}

impl Event {
    pub fn new(year: i32, description: impl Into<String>) -> Event {
        Event {
            year,
            description: description.into(),
        }
    }
}

impl Dated for Event {
    fn year(&self) -> i32 {
        self.year
    }
}

impl<T> Dated for (i32, T) {
    fn year(&self) -> i32 {
        self.0
    }
}
