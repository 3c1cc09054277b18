use clap::Parser;
use std::io::Write;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;
use yearcode::application::{
    init, ConfigService, RenderService, ShortcodeOptions, ShortcodeService, DEFAULT_EXTENSIONS,
};
use yearcode::cli::{
    format_config, format_render_summary, format_usage_html, format_usage_table, Cli, Commands,
    GlobalArgs,
};
use yearcode::error::{Result, YearcodeError};
use yearcode::infrastructure::{Clock, Config, FileSystemRepository, FixedClock, SystemClock};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init { path }) => init::init(&path),
        Some(Commands::Config {
            key,
            value,
            list,
            unset,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                print!("{}", format_config(&service.list()?));
                Ok(())
            } else if let Some(k) = key {
                if unset {
                    service.unset(&k)?;
                    println!("Unset {}", k);
                } else if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: yearcode config [--list | <key> [<value>] | <key> --unset]");
                println!("Valid keys: tag, registered");
                Ok(())
            }
        }
        Some(Commands::Render {
            path,
            write,
            extensions,
        }) => {
            let shortcodes = shortcode_service(&cli.global)?;
            let render = RenderService::new(&shortcodes);

            match path {
                None => print_raw(&render.render_reader(std::io::stdin().lock())?),
                Some(path) if path.is_dir() => {
                    if !write {
                        return Err(YearcodeError::Config(format!(
                            "Rendering a directory requires --write: {}",
                            path.display()
                        )));
                    }
                    let extensions = if extensions.is_empty() {
                        DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
                    } else {
                        extensions
                    };
                    let summary = render.write_dir(&path, &extensions)?;
                    print!("{}", format_render_summary(&summary, &path));
                    Ok(())
                }
                Some(path) if write => {
                    let count = render.write_file(&path)?;
                    println!("Rendered {} shortcode(s) in {}", count, path.display());
                    Ok(())
                }
                Some(path) => print_raw(&render.render_file(&path)?),
            }
        }
        Some(Commands::Year { from, mode }) => {
            let shortcodes = shortcode_service(&cli.global)?;
            println!("{}", shortcodes.format(from.as_deref(), &mode));
            Ok(())
        }
        Some(Commands::Tag) => {
            let shortcodes = shortcode_service(&cli.global)?;
            println!("{}", shortcodes.tag());
            Ok(())
        }
        Some(Commands::Examples { html }) => {
            let shortcodes = shortcode_service(&cli.global)?;
            let examples = shortcodes.examples();
            if html {
                print!("{}", format_usage_html(shortcodes.tag(), &examples));
            } else {
                print!("{}", format_usage_table(shortcodes.tag(), &examples));
            }
            Ok(())
        }
        None => {
            println!("yearcode - Current year shortcodes for text content");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

/// Build the shortcode service from the project config and global flags
fn shortcode_service(global: &GlobalArgs) -> Result<ShortcodeService> {
    let config = FileSystemRepository::discover_config()?;

    let options = ShortcodeOptions {
        tag: global.tag.clone(),
        registered: global
            .registered
            .as_deref()
            .map(Config::parse_tag_list)
            .unwrap_or_default(),
    };

    let clock: Rc<dyn Clock> = match &global.year {
        Some(year) => Rc::new(FixedClock::new(year.clone())),
        None => Rc::new(SystemClock),
    };

    Ok(ShortcodeService::new(&config, &options, clock))
}

/// Write rendered text to stdout exactly as produced
fn print_raw(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
