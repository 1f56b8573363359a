use std::{
    collections::{hash_map::Entry, HashMap},
    fmt,
    fs::{create_dir_all, File},
    io::{self, Read, Write},
    path::PathBuf,
    sync::{Arc, Mutex},
    time::Duration,
};

use json::JsonValue;
use reqwest::blocking::Client;

const BASE_URL: &str = "https://ddragon.leagueoflegends.com";
const LOCAL_DATA_DIR: &str = "data";

pub struct DdragonClient {
    client: Client,
    locale: String,
    load_local_json: bool,
    store_responses: bool,
    cache: Mutex<HashMap<DdragonRequestType, Arc<JsonValue>>>,
}

impl DdragonClient {
    pub fn new(
        locale: &str,
        load_local_json: bool,
        store_responses: bool,
    ) -> Result<Self, DdragonClientInitError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            locale: locale.to_string(),
            load_local_json,
            store_responses,
            cache: Mutex::new(HashMap::new()),
        })
    }

    pub fn url(&self, request_type: &DdragonRequestType) -> String {
        match request_type {
            DdragonRequestType::Versions => format!("{}/api/versions.json", BASE_URL),
            DdragonRequestType::Champions(version) => {
                format!("{}/cdn/{}/data/{}/champion.json", BASE_URL, version, self.locale)
            }
        }
    }

    pub fn request(&self, request_type: DdragonRequestType) -> Result<Arc<JsonValue>, DdragonRequestError> {
        if self.load_local_json {
            return Self::read_local(&request_type);
        }

        let mut cache = self.cache.lock().unwrap();
        match cache.entry(request_type.clone()) {
            Entry::Occupied(oe) => Ok(oe.get().clone()),
            Entry::Vacant(ve) => {
                let url = self.url(&request_type);
                log::info!("Requesting {}", url);

                let response = self.client.get(&url).send()?;
                if !response.status().is_success() {
                    return Err(DdragonRequestError::InvalidResponse(
                        request_type,
                        response.status().as_u16(),
                    ));
                }

                let text = response.text()?;
                let json = json::parse(text.as_str())?;

                if self.store_responses {
                    if let Err(err) = Self::write_local(&request_type, &json) {
                        log::warn!("Could not store {} response: {}", request_type, err);
                    }
                }

                let arc_json = Arc::new(json);
                ve.insert(arc_json.clone());
                Ok(arc_json)
            }
        }
    }

    fn local_path(request_type: &DdragonRequestType) -> PathBuf {
        PathBuf::from(LOCAL_DATA_DIR).join(format!("{}.json", request_type))
    }

    fn read_local(request_type: &DdragonRequestType) -> Result<Arc<JsonValue>, DdragonRequestError> {
        let path = Self::local_path(request_type);
        log::info!("Loading {} from {}", request_type, path.display());

        let mut file = File::open(path)?;
        let mut buf = String::new();
        file.read_to_string(&mut buf)?;
        let json = json::parse(buf.as_str())?;
        Ok(Arc::new(json))
    }

    fn write_local(request_type: &DdragonRequestType, json: &JsonValue) -> io::Result<()> {
        create_dir_all(LOCAL_DATA_DIR)?;
        let mut file = File::create(Self::local_path(request_type))?;
        file.write_all(json.pretty(2).as_bytes())
    }
}

#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub enum DdragonRequestType {
    Versions,
    Champions(String),
}

impl fmt::Display for DdragonRequestType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DdragonRequestType::Versions => write!(f, "Versions"),
            DdragonRequestType::Champions(_) => write!(f, "Champions"),
        }
    }
}

#[derive(Debug)]
pub enum DdragonClientInitError {
    HttpClientCreation(reqwest::Error),
}

impl fmt::Display for DdragonClientInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DdragonClientInitError::HttpClientCreation(e) => {
                write!(f, "Failed to create HTTP client: {}", e)
            }
        }
    }
}

impl From<reqwest::Error> for DdragonClientInitError {
    fn from(error: reqwest::Error) -> Self {
        Self::HttpClientCreation(error)
    }
}

#[derive(Debug)]
pub enum DdragonRequestError {
    ClientFailed(reqwest::Error),
    InvalidResponse(DdragonRequestType, u16),
    ParsingFailed(json::Error),
    LocalFileError(io::Error),
}

impl fmt::Display for DdragonRequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DdragonRequestError::ClientFailed(err) => write!(f, "Client error: {}", err),
            DdragonRequestError::InvalidResponse(req_type, status) => {
                write!(f, "The server returned status {} for request {}", status, req_type)
            }
            DdragonRequestError::ParsingFailed(err) => write!(f, "Parsing error: {}", err),
            DdragonRequestError::LocalFileError(err) => write!(f, "Local file error: {}", err),
        }
    }
}

impl From<reqwest::Error> for DdragonRequestError {
    fn from(error: reqwest::Error) -> Self {
        DdragonRequestError::ClientFailed(error)
    }
}

impl From<json::Error> for DdragonRequestError {
    fn from(error: json::Error) -> Self {
        DdragonRequestError::ParsingFailed(error)
    }
}

impl From<io::Error> for DdragonRequestError {
    fn from(error: io::Error) -> Self {
        DdragonRequestError::LocalFileError(error)
    }
}
