use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "sm3guard",
    about = "SM3 file-integrity guard — fingerprint files and detect tampering",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct Sm3GuardCli {
    /// Global: path to the record store (JSON); default: ~/.sm3guard/hash_record.json
    #[arg(long = "record-file", value_name = "FILE", global = true)]
    pub record_file: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the SM3 digest of each file (use "-" for stdin)
    ///
    /// Examples:
    ///   sm3guard digest report.pdf
    ///   cat report.pdf | sm3guard digest -
    Digest {
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,
    },

    /// Register a file's digest in the record store
    Record {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Annotation stored alongside the digest
        #[arg(long = "remark", value_name = "TEXT")]
        remark: Option<String>,
        /// Re-record a file that already has an entry (keeps its remark unless --remark is given)
        #[arg(long = "update", action = ArgAction::SetTrue)]
        update: bool,
    },

    /// Recompute a file's digest and compare against its record
    Verify {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// List all records
    List {
        /// Emit the store as pretty JSON instead of a table
        #[arg(long = "json", action = ArgAction::SetTrue)]
        json: bool,
    },

    /// Update the remark on an existing record
    Remark {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(value_name = "TEXT")]
        remark: String,
    },

    /// Delete a record
    Remove {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}
