use crate::errors::{Error, Result};

pub struct EventListOptions {
    // None means fresh entropy for every list; Some makes tower heights reproducible
    pub seed: Option<u64>,

    // capacity of the sentinel pillars before the first growth. doubled on demand.
    pub initial_max_level: usize,
}

impl Default for EventListOptions {
    fn default() -> Self {
        EventListOptions {
            seed: None,
            initial_max_level: 1,
        }
    }
}

impl EventListOptions {
    pub fn seeded(seed: u64) -> EventListOptions {
        EventListOptions {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.initial_max_level == 0 {
            return Err(Error::InvalidOptions(
                "initial_max_level must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
