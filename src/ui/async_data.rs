use std::sync::mpsc::{Receiver, TryRecvError};

use crate::service::data_manager::DataRetrievalResult;

pub enum DataState<T> {
    Loading,
    Loaded(T),
    Error(String),
}

/// Result of a background fetch, polled once per frame from the UI loop.
pub struct AsyncData<T> {
    state: DataState<T>,
    receiver: Option<Receiver<DataRetrievalResult<T>>>,
}

impl<T> AsyncData<T> {
    pub fn new(receiver: Receiver<DataRetrievalResult<T>>) -> Self {
        Self {
            state: DataState::Loading,
            receiver: Some(receiver),
        }
    }

    /// Returns true on the poll that ends the loading state.
    pub fn try_update(&mut self) -> bool {
        let Some(rx) = &self.receiver else {
            return false;
        };

        self.state = match rx.try_recv() {
            Ok(Ok(data)) => DataState::Loaded(data),
            Ok(Err(err)) => {
                log::error!("Data fetch failed: {}", err);
                DataState::Error(err.to_string())
            }
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                log::error!("Data fetch thread ended without a result");
                DataState::Error("Data fetch failed: channel disconnected".to_string())
            }
        };
        self.receiver = None;
        true
    }

    pub fn get_data(&self) -> Option<&T> {
        match &self.state {
            DataState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DataState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            DataState::Error(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::service::{data_manager::DataRetrievalError, gameapi::parsing::ParsingError};

    #[test]
    fn stays_loading_until_sent() {
        let (tx, rx) = mpsc::channel();
        let mut data: AsyncData<u32> = AsyncData::new(rx);

        assert!(!data.try_update());
        assert!(data.is_loading());

        tx.send(Ok(7)).unwrap();
        assert!(data.try_update());
        assert_eq!(data.get_data(), Some(&7));
        assert!(!data.try_update());
    }

    #[test]
    fn keeps_error_text() {
        let (tx, rx) = mpsc::channel();
        let mut data: AsyncData<u32> = AsyncData::new(rx);

        tx.send(Err(DataRetrievalError::Parsing(ParsingError::Empty("versions".into()))))
            .unwrap();
        data.try_update();

        assert_eq!(data.error(), Some("Parsing error: Field is empty: versions"));
        assert!(data.get_data().is_none());
    }

    #[test]
    fn dropped_sender_is_an_error() {
        let (tx, rx) = mpsc::channel::<DataRetrievalResult<u32>>();
        drop(tx);
        let mut data = AsyncData::new(rx);

        assert!(data.try_update());
        assert!(data.error().is_some());
    }
}
