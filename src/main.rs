mod cli;
mod commands;
mod config; // resolve_record_path, etc.
mod core;
mod io;
mod record;

use clap::Parser; // trait import enables Sm3GuardCli::parse()

use crate::cli::{Command, Sm3GuardCli};
use crate::config::resolve_record_path;

fn main() -> anyhow::Result<()> {
    let args = Sm3GuardCli::parse();
    let record_file = resolve_record_path(&args.record_file)?;

    let code = match args.cmd {
        Command::Digest { files } => commands::digest::main(files)?,
        Command::Record {
            file,
            remark,
            update,
        } => commands::record::main(file, remark, update, record_file)?,
        Command::Verify { file } => commands::verify::main(file, record_file)?,
        Command::List { json } => commands::list::main(json, record_file)?,
        Command::Remark { file, remark } => commands::remark::main(file, remark, record_file)?,
        Command::Remove { file } => commands::remove::main(file, record_file)?,
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
