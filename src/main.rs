use clap::Parser;
use log::LevelFilter;
use promptsel::application::{
    CheckTagsService, ConfigService, ExpandPromptService, GenerationRequest, InitService,
    ListTagsService,
};
use promptsel::cli::{format_check_report, format_expansion, format_tag_list, Cli, Commands};
use promptsel::error::PromptselError;
use promptsel::infrastructure::{FileSystemRepository, TagRepository};

fn setup_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Debug output if asked for on the command line or in the workspace config
fn debug_requested(cli: &Cli) -> bool {
    cli.verbose
        || FileSystemRepository::discover()
            .and_then(|repo| repo.load_config())
            .is_ok_and(|config| config.debug)
}

fn main() {
    let cli = Cli::parse();
    setup_logging(debug_requested(&cli));

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), PromptselError> {
    match cli.command {
        Commands::Init { path, no_samples } => {
            let written = InitService::execute(&path, !no_samples)?;
            println!("Initialized promptsel workspace at {}", path.display());
            for file in written {
                println!("  sample: {}", file.display());
            }
            Ok(())
        }
        Commands::Expand {
            prompt,
            negative,
            hires,
            hires_negative,
            seed,
            batch,
        } => {
            let repo = FileSystemRepository::discover()?;
            let service = ExpandPromptService::new(repo);
            let request = GenerationRequest {
                prompt,
                negative_prompt: negative,
                hires_prompt: hires,
                hires_negative_prompt: hires_negative,
                batch_size: batch,
                seed,
            };
            let result = service.execute(&request)?;
            print!("{}", format_expansion(&result));
            Ok(())
        }
        Commands::Tags { path } => {
            let repo = FileSystemRepository::discover()?;
            let service = ListTagsService::new(repo);
            let paths = service.execute(path.as_deref())?;
            println!("{}", format_tag_list(&paths).trim_end());
            Ok(())
        }
        Commands::Files => {
            let repo = FileSystemRepository::discover()?;
            let service = ListTagsService::new(repo);
            for file in service.files()? {
                println!("{}", file.display());
            }
            Ok(())
        }
        Commands::Check => {
            let repo = FileSystemRepository::discover()?;
            let service = CheckTagsService::new(repo);
            let report = service.execute()?;
            print!("{}", format_check_report(&report));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                for (key, value) in service.list()? {
                    println!("{} = {}", key, value);
                }
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: promptsel config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: {}",
                    promptsel::application::manage_config::CONFIG_KEYS.join(", ")
                );
                Ok(())
            }
        }
    }
}
