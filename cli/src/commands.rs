pub mod build;
pub mod classify;
pub mod convert;
pub mod list;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use invmap_common::inventory::ZoneRule;

#[derive(Parser)]
#[command(name = "invmap")]
#[command(about = "Zone-classified inventories from gathered host facts.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output, repeat for less
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Extra zone rule, checked before the built-in ones (e.g. 172=dev)
    #[arg(long = "rule", value_name = "PREFIX=ZONE", global = true)]
    pub rules: Vec<ZoneRule>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the distro/release tree and the consolidated inventory
    #[command(alias = "b")]
    Build {
        /// Directory of host-fact files, one host per file
        #[arg(default_value = "./hosts")]
        facts_dir: PathBuf,
        /// Output root
        #[arg(default_value = "./inventories")]
        output_dir: PathBuf,
        /// Remove the output root before building
        #[arg(long)]
        clean: bool,
    },
    /// Show the zone of one or more addresses
    #[command(alias = "c")]
    Classify {
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// List the hosts of a per-release inventory file
    #[command(alias = "l")]
    List { file: PathBuf },
    /// Flatten an Ansible dynamic-inventory JSON document into stanzas
    #[command(alias = "x")]
    Convert {
        #[arg(default_value = "./hosts.json")]
        source: PathBuf,
        /// File to write, replaced if present
        #[arg(default_value = "./inventory")]
        target: PathBuf,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
