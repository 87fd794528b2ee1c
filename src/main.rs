mod cli;
mod config;

use cli::{Args, Command, RenderArgs};
use config::{discover_config, load_config_from_path, ConfigFile, CONFIG_FILENAME};
use red_formatter::adapters::outbound::console::StderrProgressReporter;
use red_formatter::adapters::outbound::filesystem::FileSystemReader;
use red_formatter::adapters::outbound::formatters::register_builtin_formatters;
use red_formatter::application::dto::RenderRequest;
use red_formatter::application::factories::{SinkFactory, SinkType};
use red_formatter::application::registry::{FormatterRegistry, DEFAULT_FORMATTER};
use red_formatter::application::use_cases::RenderReportUseCase;
use red_formatter::ports::outbound::AnalysisResultReader;
use red_formatter::report::domain::Header;
use red_formatter::shared::error::{AppError, ExitCode};
use red_formatter::shared::Result;
use std::process;
use std::sync::Arc;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = init_logging(args.verbose) {
        eprintln!("⚠️  Warning: logging could not be initialized: {}", e);
    }

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn run(args: Args) -> Result<()> {
    // The registry is built once and injected everywhere it is needed
    let mut registry = FormatterRegistry::new();
    register_builtin_formatters(&mut registry)?;

    match args.command {
        Command::List => {
            print_formats(&registry);
            Ok(())
        }
        Command::Render(render) => render_report(render, Arc::new(registry)),
    }
}

fn print_formats(registry: &FormatterRegistry) {
    for name in registry.available_formatters() {
        let marker = if name == DEFAULT_FORMATTER {
            " (default)"
        } else {
            ""
        };
        println!("{}{}", name, marker);
        for descriptor in registry.formatters_for(name) {
            println!(
                "  {:<26} {:<20} multiple: {}",
                descriptor.short_type_name(),
                descriptor.media_type(),
                if descriptor.can_multiple() { "yes" } else { "no" }
            );
        }
    }
}

fn render_report(args: RenderArgs, registry: Arc<FormatterRegistry>) -> Result<()> {
    let config = match args.config {
        Some(ref path) => load_config_from_path(path)?,
        None => {
            let dir = std::env::current_dir()?;
            match discover_config(&dir)? {
                Some(config) => {
                    eprintln!(
                        "📄 Auto-discovered config file: {}",
                        dir.join(CONFIG_FILENAME).display()
                    );
                    config
                }
                None => ConfigFile::default(),
            }
        }
    };
    let request_headers = resolve_request_headers(&args.headers, &config)?;

    let reader = FileSystemReader::new();
    let result = reader.read_result(&args.input)?;
    let body = match args.body {
        Some(ref path) => reader.read_body(path)?,
        None => Vec::new(),
    };

    // CLI flags take precedence over the config file
    let format = args
        .format
        .or(config.format)
        .unwrap_or_else(|| DEFAULT_FORMATTER.to_string());
    let mut request = RenderRequest::new(format, result)
        .with_multiple(args.multiple)
        .with_body(body)
        .with_request_headers(request_headers);
    if let Some(lang) = args.lang.or(config.lang) {
        request = request.with_lang(lang);
    }
    if let Some(ui_uri) = args.ui_uri.or(config.ui_uri) {
        request = request.with_ui_uri(ui_uri);
    }

    let output = args.output;
    let progress_reporter = if std::env::var_os("NO_COLOR").is_some() {
        StderrProgressReporter::without_colors()
    } else {
        StderrProgressReporter::new()
    };

    let use_case = RenderReportUseCase::new(registry, progress_reporter);
    let response = use_case.execute_with(request, move || {
        SinkFactory::create(SinkType::from_output(output))
    })?;
    debug!(
        format = response.format,
        formatter = response.formatter,
        samples = response.samples_fed,
        "Render complete"
    );

    Ok(())
}

/// Headers given on the command line replace those from the config file.
fn resolve_request_headers(cli_headers: &[String], config: &ConfigFile) -> Result<Vec<Header>> {
    if cli_headers.is_empty() {
        return Ok(config.parsed_request_headers());
    }

    cli_headers
        .iter()
        .map(|line| {
            Header::parse(line).ok_or_else(|| {
                anyhow::Error::from(AppError::Validation {
                    message: format!(
                        "'{}' is not a header line\n\n💡 Hint: Pass headers as --header \"Name: value\"",
                        line
                    ),
                })
            })
        })
        .collect()
}
