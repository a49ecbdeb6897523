#![allow(dead_code)]

use rand::distributions::{Alphanumeric, DistString};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use eventlist::{Event, EventList, EventListOptions};

pub fn rand_description(rng: &mut StdRng) -> String {
    Alphanumeric.sample_string(rng, 32)
}

pub fn gen_events(count: usize, years: i32, seed: u64) -> Vec<Event> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let year = rng.gen_range(0..years);
            Event::new(year, rand_description(&mut rng))
        })
        .collect()
}

pub fn populated(events: &[Event]) -> EventList<Event> {
    let mut list = EventList::with_options(EventListOptions::seeded(9989)).unwrap();
    list.extend(events.iter().cloned());
    list
}
