use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use yomi_subtitle::SubtitleFormat;

#[derive(Debug, Parser)]
#[command(name = "yomi", version, about = "Parse subtitles and split Japanese text into words")]
pub struct Cli {
    /// JSON config profile
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a subtitle file and print its sentences as JSON
    Parse {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
        format: FormatArg,
        /// Extra glossary files used to fill in word readings and meanings
        #[arg(long)]
        glossary: Vec<PathBuf>,
    },
    /// Split one line of text into words
    Tokenize {
        text: String,
        #[arg(long, default_value = "seg-1")]
        segment_id: String,
    },
    /// Print the sentence active at a playback time
    At {
        file: PathBuf,
        seconds: f64,
        #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
        format: FormatArg,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Pick from the file extension
    Auto,
    Srt,
    Vtt,
    Plain,
}

impl FormatArg {
    pub fn to_format(self) -> Option<SubtitleFormat> {
        match self {
            FormatArg::Auto => None,
            FormatArg::Srt => Some(SubtitleFormat::Srt),
            FormatArg::Vtt => Some(SubtitleFormat::Vtt),
            FormatArg::Plain => Some(SubtitleFormat::Plain),
        }
    }
}
