use std::{
    fmt,
    sync::{
        mpsc::{self, Receiver},
        Arc,
    },
    thread,
};

use once_cell::sync::OnceCell;

use crate::{
    model::champion::Catalog,
    service::gameapi::{
        ddragon_client::{DdragonClient, DdragonClientInitError, DdragonRequestError, DdragonRequestType},
        parsing::{champion::parse_champions, versions::parse_latest_version, ParsingError},
    },
};

pub struct DataManager {
    client: Arc<DdragonClient>,
    catalog_cache: Arc<OnceCell<Catalog>>,
}

impl DataManager {
    pub fn new(locale: &str, load_local: bool, store_responses: bool) -> Result<Self, DdragonClientInitError> {
        let client = DdragonClient::new(locale, load_local, store_responses)?;

        Ok(Self {
            client: Arc::new(client),
            catalog_cache: Arc::new(OnceCell::new()),
        })
    }

    // Generic async wrapper that executes fetch in a thread
    pub fn async_wrapper<T, F>(&self, fetch_fn: F) -> Receiver<DataRetrievalResult<T>>
    where
        T: Send + 'static,
        F: FnOnce() -> DataRetrievalResult<T> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = fetch_fn();
            tx.send(result).ok();
        });

        rx
    }

    /// Resolves the latest patch, then fetches the champion list for it. The
    /// second request depends on the first, so both run on the same thread.
    pub fn load_catalog(&self) -> Receiver<DataRetrievalResult<Catalog>> {
        let client = Arc::clone(&self.client);
        let cache = Arc::clone(&self.catalog_cache);

        self.async_wrapper(move || {
            let catalog = cache.get_or_try_init(|| DataManager::retrieve_catalog(&client))?;
            Ok(catalog.clone())
        })
    }

    fn retrieve_catalog(client: &DdragonClient) -> DataRetrievalResult<Catalog> {
        let versions_json = client.request(DdragonRequestType::Versions)?;
        let version = parse_latest_version(Arc::as_ref(&versions_json))?;
        log::info!("Latest dataset version is {}", version);

        let champs_json = client.request(DdragonRequestType::Champions(version.clone()))?;
        let champions = parse_champions(Arc::as_ref(&champs_json))?;
        log::info!("Loaded {} champions", champions.len());

        Ok(Catalog { version, champions })
    }
}

pub type DataRetrievalResult<T> = Result<T, DataRetrievalError>;

#[derive(Debug)]
pub enum DataRetrievalError {
    Client(DdragonRequestError),
    Parsing(ParsingError),
}

impl fmt::Display for DataRetrievalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataRetrievalError::Client(err) => write!(f, "Client error: {}", err),
            DataRetrievalError::Parsing(err) => write!(f, "Parsing error: {}", err),
        }
    }
}

impl From<DdragonRequestError> for DataRetrievalError {
    fn from(error: DdragonRequestError) -> Self {
        Self::Client(error)
    }
}

impl From<ParsingError> for DataRetrievalError {
    fn from(error: ParsingError) -> Self {
        Self::Parsing(error)
    }
}
