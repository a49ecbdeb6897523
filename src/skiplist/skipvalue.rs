pub enum SkipData<T> {
    // head and tail
    Dummy(),
    // stored payload
    Owned(T),
    // released slot waiting in the free list
    Vacant(),
}

impl<T> SkipData<T> {
    pub fn is_dummy(&self) -> bool {
        matches!(self, SkipData::Dummy())
    }

    pub fn is_vacant(&self) -> bool {
        matches!(self, SkipData::Vacant())
    }

    pub fn get_ref(&self) -> Option<&T> {
        match self {
            SkipData::Owned(data) => Some(data),
            _ => None,
        }
    }

    // leaves the slot vacant
    pub fn take(&mut self) -> Option<T> {
        match std::mem::replace(self, SkipData::Vacant()) {
            SkipData::Owned(data) => Some(data),
            other => {
                *self = other;
                None
            }
        }
    }
}
