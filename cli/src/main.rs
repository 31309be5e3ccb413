mod commands;
mod terminal;

use commands::{CommandLine, Commands, build, classify, convert, list};
use invmap_common::config::Config;
use terminal::{print, spinner};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    spinner::init_logging();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        rules: commands.rules,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Build {
            facts_dir,
            output_dir,
            clean,
        } => {
            print::section("building inventories", cfg.quiet);
            build::build(&facts_dir, &output_dir, clean, &cfg)
        }
        Commands::Classify { addresses } => {
            print::section("zone classification", cfg.quiet);
            classify::classify(&addresses, &cfg)
        }
        Commands::List { file } => {
            print::section("release inventory", cfg.quiet);
            list::list(&file, &cfg)
        }
        Commands::Convert { source, target } => {
            print::section("dynamic inventory", cfg.quiet);
            convert::convert(&source, &target, &cfg)
        }
    }
}
