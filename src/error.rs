//! Error taxonomy for the subnet planner.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by address parsing, split planning and report persistence.
#[derive(Error, Debug)]
pub enum SubnetError {
    /// The text is not a dotted-decimal IPv4 address.
    #[error("`{text}` is not a valid IPv4 address")]
    AddressFormat { text: String },

    /// A prefix length outside 0..=32.
    #[error("prefix length /{len} is out of range (0-32)")]
    PrefixRange { len: u16 },

    /// The requested split needs more host bits than the network has left.
    #[error(
        "splitting /{prefix} into {requested} subnets needs a /{needed} prefix, past the /32 limit"
    )]
    AddressSpaceExhausted {
        prefix: u8,
        requested: u64,
        needed: u16,
    },

    /// The requested split is beyond the enumeration ceiling.
    #[error("{requested} subnets requested, the planner enumerates at most {max}")]
    SplitTooLarge { requested: u64, max: u64 },

    /// Address arithmetic walked off the end of the 32-bit space.
    #[error("subnet enumeration overflowed the IPv4 address space")]
    AddressOverflow,

    /// Read-back of a report file that is not there.
    #[error("report file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Failure writing a report or creating its directory.
    #[error("error writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failure serializing the JSON report copy.
    #[error("error serializing report: {0}")]
    Serialize(#[from] serde_json::Error),
}
