use std::{
    fs::File,
    io::{self, Read},
    path::PathBuf,
};
use thiserror::Error;
use zip::{ZipArchive, read::ZipFile};

mod config;
mod models;
pub use config::*;
pub use models::*;

/// Columns every city export must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Start Time",
    "End Time",
    "Start Station",
    "End Station",
    "User Type",
];

pub const GENDER_COLUMN: &str = "Gender";
pub const BIRTH_YEAR_COLUMN: &str = "Birth Year";

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Csv file {0} is missing required column {1}")]
    MissingColumn(String, String),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
    #[error("No storage configured for the dataset")]
    MissingSource,
    #[error("Invalid timestamp {value:?}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::format::ParseError,
    },
}

/// Which optional rider columns a city's file carries. A per-city
/// structural fact, discovered from the header row at load time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Schema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

#[derive(Default)]
pub enum StorageType {
    #[default]
    None,
    Dir(PathBuf),
    Zip(PathBuf),
}

#[derive(Default)]
pub struct Dataset {
    config: Config,
    storage: StorageType,
}

impl Dataset {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            storage: Default::default(),
        }
    }

    pub fn from_dir(mut self, path: PathBuf) -> Self {
        self.storage = StorageType::Dir(path);
        self
    }

    pub fn from_zip(mut self, path: PathBuf) -> Self {
        self.storage = StorageType::Zip(path);
        self
    }

    pub fn file_name(&self, city: City) -> &str {
        self.config.file_name(city)
    }

    /// Reads a city's rows and the schema of its file. A load is
    /// all-or-nothing: the first unreadable or unparsable row fails it.
    pub fn read_trips(&self, city: City) -> Result<(Schema, Vec<RawTrip>), Error> {
        let file_name = self.config.file_name(city);
        match &self.storage {
            StorageType::None => Err(Error::MissingSource),
            StorageType::Dir(path) => {
                let file = File::open(path.join(file_name))?;
                read_rows(file, file_name)
            }
            StorageType::Zip(path) => {
                let zip_file = File::open(path)?;
                let mut archive = ZipArchive::new(zip_file)?;
                let file = get_file(&mut archive, file_name)?;
                read_rows(file, file_name)
            }
        }
    }
}

fn read_rows<R: Read>(reader: R, file_name: &str) -> Result<(Schema, Vec<RawTrip>), Error> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(Error::MissingColumn(
                file_name.to_string(),
                column.to_string(),
            ));
        }
    }
    let schema = Schema {
        has_gender: headers.iter().any(|header| header == GENDER_COLUMN),
        has_birth_year: headers.iter().any(|header| header == BIRTH_YEAR_COLUMN),
    };

    let mut trips = Vec::new();
    for result in reader.deserialize() {
        let record: RawTrip = result?;
        trips.push(record);
    }
    Ok((schema, trips))
}

fn get_file<'a>(
    archive: &'a mut ZipArchive<File>,
    name: &'a str,
) -> Result<ZipFile<'a, File>, Error> {
    let index = archive
        .index_for_name(name)
        .ok_or(Error::FileNotFound(name.to_string()))?;
    let file = archive.by_index(index)?;
    Ok(file)
}
