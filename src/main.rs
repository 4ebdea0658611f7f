use clap::Parser;
use color_eyre::{eyre::eyre, Result};
use joynode::config::{AppConfig, SourceKind};
use joynode::enumeration::JoystickSession;
use joynode::report::{DeviceReport, PathDisplay};
use joynode::resolver::DeviceNodeResolver;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// List joysticks together with their /dev/input/js* device nodes
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Config file (defaults to <config dir>/joynode/config.toml)
    #[arg(short, long, env = "JOYNODE_CONFIG")]
    config: Option<PathBuf>,

    /// Enumeration backend
    #[arg(short, long, value_enum)]
    source: Option<SourceKind>,

    /// Device tree directory holding the event* and js* entries
    #[arg(long)]
    sysfs_root: Option<PathBuf>,

    /// Directory holding the device nodes
    #[arg(long)]
    dev_root: Option<PathBuf>,

    /// Write the default configuration to the config path and exit
    #[arg(long)]
    write_default_config: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup(args.verbose)?;

    if args.write_default_config {
        let path = args
            .config
            .clone()
            .or_else(AppConfig::default_path)
            .ok_or_else(|| eyre!("No config path given and no config directory available"))?;
        return AppConfig::write_default(&path);
    }

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(source) = args.source {
        config.source = source;
    }
    if let Some(root) = args.sysfs_root {
        config.resolver.device_tree_root = root;
    }
    if let Some(dev_root) = args.dev_root {
        config.resolver.device_node_dir = dev_root;
    }
    debug!("Effective configuration: {:?}", config);

    let mut session = JoystickSession::open(config.source, &config.resolver)
        .map_err(|e| eyre!("Failed to open joystick session: {}", e))?;
    let joysticks = session
        .joysticks()
        .map_err(|e| eyre!("Failed to enumerate joysticks: {}", e))?;

    let resolver = DeviceNodeResolver::sysfs(config.resolver);

    println!("Joysticks: {}", joysticks.len());
    for info in &joysticks {
        let path = PathDisplay::compose(info.path.as_deref(), |raw| resolver.resolve_path(raw));
        println!("{}", DeviceReport { info, path });
    }

    session.close();
    info!("Done");
    Ok(())
}

fn setup(verbose: bool) -> Result<()> {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "0")
    }
    color_eyre::install()?;
    let directive = log_directive(verbose, std::env::var("RUST_LOG").ok());
    std::env::set_var("RUST_LOG", &directive);
    setup_logging_env(&directive)?;
    Ok(())
}

/// `--verbose` wins, then an inherited `RUST_LOG`, then `info`.
fn log_directive(verbose: bool, rust_log: Option<String>) -> String {
    if verbose {
        return "debug".to_string();
    }
    match rust_log {
        Some(directive) if !directive.trim().is_empty() => directive,
        _ => "info".to_string(),
    }
}

fn setup_logging_env(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .map_err(|e| eyre!("Invalid log filter '{}': {}", directive, e))?;

    // Report goes to stdout, logs to stderr
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inherited_rust_log_is_honoured() {
        assert_eq!(log_directive(false, Some("debug".to_string())), "debug");
        assert_eq!(
            log_directive(false, Some("joynode=trace".to_string())),
            "joynode=trace"
        );
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(log_directive(false, None), "info");
        assert_eq!(log_directive(false, Some("  ".to_string())), "info");
    }

    #[test]
    fn test_verbose_overrides_rust_log() {
        assert_eq!(log_directive(true, Some("warn".to_string())), "debug");
        assert_eq!(log_directive(true, None), "debug");
    }

    #[test]
    fn test_directives_build_a_filter() {
        for directive in ["info", "debug", "joynode=trace"] {
            assert!(EnvFilter::try_new(log_directive(false, Some(directive.to_string()))).is_ok());
        }
    }
}
