//! Parseo de la línea de comandos y mensaje de ayuda.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};
use peekflow::RunConfig;

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(disable_help_flag = true,
          disable_version_flag = true,
          args_override_self = true,
          about = "An inspector of types.")]
pub struct Cli {
    /// Print the help message and exit
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Abort further inspection on error (best effort with --concurrent)
    #[arg(short = 'a', long = "abort-on-error")]
    pub abort_on_error: bool,

    /// Collect data concurrently
    #[arg(short = 'c', long = "concurrent")]
    pub concurrent: bool,

    /// Read identifiers from a file
    #[arg(short = 'r', long = "read-from-file", value_name = "FILENAME")]
    pub read_from_file: Option<PathBuf>,

    /// Write ALL collected data to a NEW file
    #[arg(short = 's', long = "single-file", value_name = "FILENAME", conflicts_with = "write_to_directory")]
    pub single_file: Option<PathBuf>,

    /// Write EACH type's data to a NEW file
    #[arg(short = 'w', long = "write-to-directory", value_name = "DIRNAME")]
    pub write_to_directory: Option<PathBuf>,

    /// fully.qualified.Name or fully/qualified/Name[.class]
    #[arg(value_name = "IDENTIFIER")]
    pub identifiers: Vec<String>,
}

impl Cli {
    pub fn into_config(self) -> RunConfig {
        let mut config = RunConfig::new().help(self.help)
                                         .abort_on_error(self.abort_on_error)
                                         .concurrent(self.concurrent)
                                         .identifiers(self.identifiers);
        if let Some(path) = self.read_from_file {
            config = config.read_from(path);
        }
        if let Some(path) = self.single_file {
            config = config.single_file(path);
        } else if let Some(dir) = self.write_to_directory {
            config = config.write_to_directory(dir);
        }
        config
    }
}

fn command(program: &str) -> clap::Command {
    Cli::command().bin_name(program.to_string())
                  .after_help(examples(program))
}

/// Parsea `args` (el primer elemento es el nombre del binario).
pub fn parse<I, T>(program: &str, args: I) -> Result<Cli, clap::Error>
    where I: IntoIterator<Item = T>,
          T: Into<OsString> + Clone
{
    let matches = command(program).try_get_matches_from(args)?;
    Cli::from_arg_matches(&matches)
}

/// Mensaje de ayuda completo.
pub fn usage(program: &str) -> String {
    command(program).render_help().to_string()
}

fn examples(program: &str) -> String {
    let pad = "    ";
    format!("Examples:\n\
             {pad}{program} std.vec.Vec std/option/Option.class byte\n\n\
             {pad}{program} -s /tmp/types.txt -r /tmp/identifiers.txt std.sync.Arc\n\n\
             {pad}mkdir /tmp/types &&\n\
             {pad}{program} -acw /tmp/types -r /tmp/identifiers.txt")
}
