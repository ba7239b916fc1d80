//! Domain ports: driven adapters the core calls out to, and the driving
//! port inbound adapters call in through.

pub mod directory_query;
pub mod profile_source;
pub mod record_source;

pub use self::directory_query::{DirectoryQuery, FixtureDirectoryQuery};
pub use self::profile_source::{
    FixtureProfileSource, ProfileFields, ProfileSource, ProfileSourceError,
};
pub use self::record_source::{FixtureRecordSource, RecordSource, RecordSourceError};

#[cfg(test)]
pub use self::directory_query::MockDirectoryQuery;
#[cfg(test)]
pub use self::profile_source::MockProfileSource;
#[cfg(test)]
pub use self::record_source::MockRecordSource;
