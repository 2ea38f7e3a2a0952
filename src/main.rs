use clap::{Parser, Subcommand};
use std::path::PathBuf;
use topic_nav::{config, manifest, output};
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "topic-nav")]
#[command(about = "Resolve topic-based sidebar navigation for a docs site")]
#[command(long_about = "\
Resolve topic-based sidebar navigation for a docs site

Topics are declared in nav.toml, each with content globs over the docs
directory. Pages are listed under every topic whose globs match them,
minus anything matched by a global exclude.

Content structure:

  nav.toml                         # Topics, excludes, overrides
  src/content/docs/
  ├── guides/example.md
  ├── python/
  │   ├── 010-intro.md             # Title from front matter or first # heading
  │   └── drafts/wip.md            # Dropped by excludes = [\"python/drafts/**\"]
  └── fastapi/
      └── 02-path-parameters/
          └── index.md             # Untitled: labelled \"path parameters\"

Run 'topic-nav gen-config' to print a documented nav.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Navigation config file
    #[arg(long, default_value = "nav.toml", global = true)]
    config: PathBuf,

    /// Content directory (overrides content_root from the config)
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Log every matched and excluded path
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve and print the navigation tree
    Resolve {
        /// Print the manifest as JSON instead of a tree
        #[arg(long)]
        json: bool,
    },
    /// Validate config and content without printing the tree
    Check,
    /// Print a stock nav.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Command::Resolve { json } => {
            let manifest = manifest::build(&cli.config, cli.content.as_deref())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&manifest)?);
            } else {
                output::print_navigation(&manifest);
            }
        }
        Command::Check => {
            println!("==> Checking {}", cli.config.display());
            let manifest = manifest::build(&cli.config, cli.content.as_deref())?;
            println!("{}", output::format_summary(&manifest));
            println!("==> Navigation is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Install the stderr log subscriber.
fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// `--verbose` forces DEBUG; otherwise a usable `RUST_LOG` wins over WARN.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn default_level_is_warn() {
        assert_eq!(log_filter(false, None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(
            log_filter(false, Some("  ")).max_level_hint(),
            Some(LevelFilter::WARN)
        );
    }

    #[test]
    fn rust_log_sets_level() {
        assert_eq!(
            log_filter(false, Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            log_filter(false, Some("error")).max_level_hint(),
            Some(LevelFilter::ERROR)
        );
    }

    #[test]
    fn verbose_forces_debug() {
        assert_eq!(
            log_filter(true, Some("error")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }
}
