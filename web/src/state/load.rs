use shared_types::HotelRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    /// The fetch itself failed. Retryable.
    Failed(String),
    /// The fetch succeeded but no hotel has this id. Terminal.
    NotFound,
    Ready(HotelRecord),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn hotel(&self) -> Option<&HotelRecord> {
        match self {
            LoadState::Ready(hotel) => Some(hotel),
            _ => None,
        }
    }
}

/// Identifies one in-flight fetch. Only the most recently issued ticket may
/// write its result back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    pub hotel_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HotelLoader {
    generation: u64,
    hotel_id: Option<String>,
    state: LoadState,
}

impl Default for HotelLoader {
    fn default() -> Self {
        Self {
            generation: 0,
            hotel_id: None,
            state: LoadState::Loading,
        }
    }
}

impl HotelLoader {
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn hotel_id(&self) -> Option<&str> {
        self.hotel_id.as_deref()
    }

    /// Enters `Loading` for `hotel_id`, dropping any previous error or record.
    pub fn begin(&mut self, hotel_id: impl Into<String>) -> LoadTicket {
        let hotel_id = hotel_id.into();
        self.generation += 1;
        self.hotel_id = Some(hotel_id.clone());
        self.state = LoadState::Loading;

        LoadTicket {
            generation: self.generation,
            hotel_id,
        }
    }

    /// Restarts the load for the current id. `None` if nothing was ever requested.
    pub fn retry(&mut self) -> Option<LoadTicket> {
        let hotel_id = self.hotel_id.clone()?;
        Some(self.begin(hotel_id))
    }

    /// Applies a finished fetch. Returns `false` and leaves the state alone
    /// when a newer `begin` has superseded `ticket`.
    pub fn complete(
        &mut self,
        ticket: &LoadTicket,
        outcome: Result<Option<HotelRecord>, String>,
    ) -> bool {
        if ticket.generation != self.generation {
            return false;
        }

        self.state = match outcome {
            Ok(Some(hotel)) => LoadState::Ready(hotel),
            Ok(None) => LoadState::NotFound,
            Err(message) => LoadState::Failed(message),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::HotelLocation;

    fn hotel(id: &str) -> HotelRecord {
        HotelRecord {
            id: id.to_string(),
            name: format!("Hotel {}", id),
            address: "1 Main St".to_string(),
            description: String::new(),
            images: vec!["a".to_string(), "b".to_string()],
            price_per_night: 200.0,
            star_rating: 4,
            rating: 4.5,
            review_count: 10,
            amenities: vec![],
            available: true,
            featured: false,
            location: HotelLocation {
                city: "Austin".to_string(),
                state: "TX".to_string(),
                lat: None,
                long: None,
            },
        }
    }

    #[test]
    fn test_starts_loading() {
        let loader = HotelLoader::default();
        assert!(loader.state().is_loading());
        assert_eq!(loader.hotel_id(), None);
    }

    #[test]
    fn test_success_moves_to_ready() {
        let mut loader = HotelLoader::default();
        let ticket = loader.begin("h1");

        assert!(loader.complete(&ticket, Ok(Some(hotel("h1")))));
        assert_eq!(loader.state().hotel().map(|h| h.id.as_str()), Some("h1"));
    }

    #[test]
    fn test_failure_keeps_message() {
        let mut loader = HotelLoader::default();
        let ticket = loader.begin("h1");

        loader.complete(&ticket, Err("connection refused".to_string()));
        assert_eq!(
            loader.state(),
            &LoadState::Failed("connection refused".to_string())
        );
    }

    #[test]
    fn test_empty_result_is_not_found() {
        let mut loader = HotelLoader::default();
        let ticket = loader.begin("missing");

        loader.complete(&ticket, Ok(None));
        assert_eq!(loader.state(), &LoadState::NotFound);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut loader = HotelLoader::default();
        let first = loader.begin("h1");
        let second = loader.begin("h2");

        // h1 resolves late, after the route already moved on to h2
        assert!(!loader.complete(&first, Ok(Some(hotel("h1")))));
        assert!(loader.state().is_loading());

        assert!(loader.complete(&second, Ok(Some(hotel("h2")))));
        assert_eq!(loader.state().hotel().map(|h| h.id.as_str()), Some("h2"));
    }

    #[test]
    fn test_completion_applies_only_once_per_ticket_generation() {
        let mut loader = HotelLoader::default();
        let ticket = loader.begin("h1");
        assert!(loader.complete(&ticket, Ok(Some(hotel("h1")))));

        let next = loader.begin("h1");
        assert!(loader.state().is_loading());
        assert!(!loader.complete(&ticket, Ok(None)));
        assert!(loader.complete(&next, Ok(Some(hotel("h1")))));
    }

    #[test]
    fn test_retry_reloads_same_id_and_clears_error() {
        let mut loader = HotelLoader::default();
        assert!(loader.retry().is_none());

        let ticket = loader.begin("h1");
        loader.complete(&ticket, Err("timeout".to_string()));

        let retry = loader.retry().unwrap();
        assert_eq!(retry.hotel_id, "h1");
        assert!(loader.state().is_loading());
    }
}
