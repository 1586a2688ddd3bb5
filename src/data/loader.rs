use std::io::Read;
use std::sync::OnceLock;
use std::time::Duration;

use super::cache::DatasetSource;
use super::error::DataUnavailable;
use super::model::{PassengerRecord, PassengerTable, COLUMN_NAMES};

/// Fixed location of the passenger dataset.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/datasciencedojo/datasets/master/titanic.csv";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const READ_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_RESPONSE_BYTES: usize = 16 * 1024 * 1024;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Fetch the passenger CSV from [`DATASET_URL`] and parse it.
///
/// Every call performs network I/O; go through
/// [`DatasetCache`](super::cache::DatasetCache) to reuse a loaded table.
pub fn load() -> Result<PassengerTable, DataUnavailable> {
    fetch_table(DATASET_URL)
}

/// The remote CSV as a [`DatasetSource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoteCsv;

impl DatasetSource for RemoteCsv {
    fn fetch(&self) -> Result<PassengerTable, DataUnavailable> {
        load()
    }
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

fn agent() -> &'static ureq::Agent {
    static AGENT: OnceLock<ureq::Agent> = OnceLock::new();
    AGENT.get_or_init(|| {
        ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(READ_TIMEOUT)
            .build()
    })
}

fn fetch_table(url: &str) -> Result<PassengerTable, DataUnavailable> {
    log::info!("Fetching passenger dataset from {url}");
    let response = match agent().get(url).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(status, _)) => {
            return Err(DataUnavailable::Status {
                url: url.to_string(),
                status,
            });
        }
        Err(err) => {
            return Err(DataUnavailable::Fetch {
                url: url.to_string(),
                message: err.to_string(),
            });
        }
    };

    let bytes = read_response_bytes(response, url, MAX_RESPONSE_BYTES)?;
    let table = parse_csv(bytes.as_slice())?;
    log::info!(
        "Loaded {} passengers ({} classes, {} genders)",
        table.len(),
        table.classes.len(),
        table.genders.len()
    );
    Ok(table)
}

/// Read the body into memory, refusing anything over `max_bytes`.
fn read_response_bytes(
    response: ureq::Response,
    url: &str,
    max_bytes: usize,
) -> Result<Vec<u8>, DataUnavailable> {
    let too_large = || DataUnavailable::TooLarge {
        url: url.to_string(),
        limit: max_bytes,
    };

    let declared = response
        .header("Content-Length")
        .and_then(|len| len.parse::<u64>().ok());
    if declared.is_some_and(|len| len > max_bytes as u64) {
        return Err(too_large());
    }

    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(max_bytes as u64 + 1)
        .read_to_end(&mut bytes)
        .map_err(|source| DataUnavailable::Read {
            url: url.to_string(),
            source,
        })?;
    if bytes.len() > max_bytes {
        return Err(too_large());
    }
    Ok(bytes)
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// Parse passenger CSV text with a header row naming every column in
/// [`COLUMN_NAMES`]. Extra columns are ignored.
pub fn parse_csv<R: Read>(source: R) -> Result<PassengerTable, DataUnavailable> {
    let mut reader = csv::Reader::from_reader(source);
    let headers = reader.headers()?.clone();

    if let Some(missing) = COLUMN_NAMES
        .iter()
        .find(|name| !headers.iter().any(|h| h == **name))
    {
        return Err(DataUnavailable::MissingColumn(missing.to_string()));
    }

    let records = reader
        .deserialize::<PassengerRecord>()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PassengerTable::from_records(records))
}
