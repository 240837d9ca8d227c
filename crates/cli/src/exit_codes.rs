//! CLI Exit Code Registry
//!
//! Single source of truth for `linkgroup` exit codes. Scripts rely on them.
//!
//! | Code | Meaning                                           |
//! |------|---------------------------------------------------|
//! | 0    | Success                                           |
//! | 1    | General error (unspecified)                       |
//! | 2    | Usage error (bad args; clap also exits with 2)    |
//! | 3    | Invalid input: missing columns or empty cells     |
//! | 4    | A link references a node outside the universe     |
//! | 5    | Invalid config file                               |
//! | 6    | I/O error reading input or writing output         |

use linkgroup_partition::PartitionError;

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, conflicting options.
pub const EXIT_USAGE: u8 = 2;

/// Required input columns are absent, or a required cell is empty.
pub const EXIT_INVALID_INPUT: u8 = 3;

/// A relation pair names a node that is not in the universe.
pub const EXIT_UNKNOWN_NODE: u8 = 4;

/// Config file failed to parse or validate.
pub const EXIT_INVALID_CONFIG: u8 = 5;

/// Cannot read input or write output.
pub const EXIT_IO: u8 = 6;

/// Map an engine error to its exit code.
pub fn partition_exit_code(err: &PartitionError) -> u8 {
    match err {
        PartitionError::InvalidInput { .. } | PartitionError::MissingValue { .. } => {
            EXIT_INVALID_INPUT
        }
        PartitionError::UnknownNode { .. } => EXIT_UNKNOWN_NODE,
        PartitionError::ConfigParse(_) | PartitionError::ConfigValidation(_) => {
            EXIT_INVALID_CONFIG
        }
        PartitionError::Io(_) => EXIT_IO,
    }
}
