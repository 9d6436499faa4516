//! CLI entrypoint for agency-site
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use agency_application::{
    BlogQuery, QueryContentUseCase, SiteConfig, SubmitFormUseCase, WorkQuery,
};
use agency_domain::form::ServiceRequestWizard;
use agency_domain::taxonomy::popular;
use agency_domain::{ConfigIssue, FormType, OutputFormat, PrefillContext, Severity};
use agency_infrastructure::{
    ConfigLoader, FileConfig, FsContentStore, TurnstileVerifier, Web3FormsRelay,
    build_http_client,
};
use agency_presentation::{
    Cli, Collection, Command, ConsoleFormatter, ContentArgs, WizardView, build_router, serve,
};
use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use clap::{CommandFactory, Parser};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const LOG_FILE_PREFIX: &str = "agency-site.log";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        let config = load_config(&cli)?;
        println!();
        println!("{}", toml::to_string_pretty(&config.redacted())?);
        return Ok(());
    }

    let config = load_config(&cli)?;

    // Initialize logging based on verbosity level
    let _log_guard = init_logging(cli.verbose, &config);

    info!("Starting agency-site");

    let (site, issues) = config.to_site_config();
    for issue in &issues {
        match issue.severity {
            Severity::Error => error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Command::Serve { bind } => run_server(&config, &site, bind).await,
        Command::CheckConfig => {
            match cli.output {
                OutputFormat::Text => print!("{}", ConsoleFormatter::config_issues(&issues)),
                OutputFormat::Json => {
                    let issues: Vec<_> = issues
                        .iter()
                        .map(|i| {
                            json!({
                                "severity": format!("{:?}", i.severity).to_lowercase(),
                                "message": i.message,
                            })
                        })
                        .collect();
                    println!("{}", ConsoleFormatter::json(&issues));
                }
            }
            ensure_no_config_errors(&issues)
        }
        Command::Prefill { query } => {
            preview_prefill(&query, &site, cli.output);
            Ok(())
        }
        Command::Content(args) => {
            let text = list_content(&content_queries(&config, &site), &args, cli.output).await?;
            println!("{}", text);
            Ok(())
        }
        Command::Show { collection, slug } => {
            let text = show_item(&content_queries(&config, &site), collection, &slug, cli.output).await?;
            println!("{}", text);
            Ok(())
        }
        Command::Related {
            collection,
            slug,
            limit,
        } => {
            let queries = content_queries(&config, &site);
            let text = related_items(&queries, collection, &slug, limit, cli.output).await?;
            println!("{}", text);
            Ok(())
        }
        Command::Taxonomy { kind, top } => {
            let mut items = content_queries(&config, &site).taxonomy(kind).await?;
            if let Some(limit) = top {
                items = popular(items, limit);
            }
            let text = match cli.output {
                OutputFormat::Text => ConsoleFormatter::taxonomy(kind, &items),
                OutputFormat::Json => ConsoleFormatter::json(&items),
            };
            println!("{}", text);
            Ok(())
        }
    }
}

/// Fails when any issue is an error, so `check-config` exits non-zero after
/// the log writer has flushed.
fn ensure_no_config_errors(issues: &[ConfigIssue]) -> Result<()> {
    let errors = issues.iter().filter(|i| i.is_error()).count();
    if errors > 0 {
        return Err(anyhow!("configuration has {} error(s)", errors));
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let loaded = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    };
    loaded.map_err(|e| anyhow!("Failed to load configuration: {}", e))
}

/// Console logging filtered by `-v` (or `RUST_LOG`), plus a daily log file
/// when `[logging] dir` is set.
fn init_logging(verbose: u8, config: &FileConfig) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match &config.logging.dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(filter());
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter());

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}

async fn run_server(
    config: &FileConfig,
    site: &SiteConfig,
    bind: Option<std::net::SocketAddr>,
) -> Result<()> {
    // === Dependency Injection ===
    let client = build_http_client(site.server().request_timeout)
        .context("Failed to create HTTP client")?;

    let verifier = TurnstileVerifier::new(
        client.clone(),
        config.turnstile.endpoint.clone(),
        config.turnstile.secret().map(str::to_string),
    );
    let relay = FormType::ALL
        .into_iter()
        .fold(
            Web3FormsRelay::new(client, config.web3forms.endpoint.clone()),
            |relay, form_type| relay.with_key(form_type, config.web3forms.key_for(form_type)),
        );

    let use_case = SubmitFormUseCase::new(Arc::new(verifier), Arc::new(relay));
    let router = build_router(use_case);

    let addr = bind.unwrap_or(site.server().bind);
    serve(router, addr)
        .await
        .with_context(|| format!("Server on {} failed", addr))
}

fn content_queries(config: &FileConfig, site: &SiteConfig) -> QueryContentUseCase<FsContentStore> {
    // === Dependency Injection ===
    let store = Arc::new(FsContentStore::new(&config.content.root));
    QueryContentUseCase::new(store, *site.content())
}

async fn list_content(
    queries: &QueryContentUseCase<FsContentStore>,
    args: &ContentArgs,
    output: OutputFormat,
) -> Result<String> {
    let json = output == OutputFormat::Json;
    Ok(match args.collection {
        Collection::Blog => {
            let page = queries.list_blog(&blog_query(args)).await?;
            if json {
                ConsoleFormatter::json(&page)
            } else {
                ConsoleFormatter::blog_page(&page)
            }
        }
        Collection::Work => {
            let page = queries.list_work(&work_query(args)).await?;
            if json {
                ConsoleFormatter::json(&page)
            } else {
                ConsoleFormatter::work_page(&page)
            }
        }
    })
}

async fn show_item(
    queries: &QueryContentUseCase<FsContentStore>,
    collection: Collection,
    slug: &str,
    output: OutputFormat,
) -> Result<String> {
    let json = output == OutputFormat::Json;
    Ok(match collection {
        Collection::Blog => {
            let post = queries.blog_post(slug).await?;
            if json {
                ConsoleFormatter::json(&post)
            } else {
                ConsoleFormatter::blog_post(&post)
            }
        }
        Collection::Work => {
            let project = queries.work_project(slug).await?;
            if json {
                ConsoleFormatter::json(&project)
            } else {
                ConsoleFormatter::work_project(&project)
            }
        }
    })
}

async fn related_items(
    queries: &QueryContentUseCase<FsContentStore>,
    collection: Collection,
    slug: &str,
    limit: usize,
    output: OutputFormat,
) -> Result<String> {
    let json = output == OutputFormat::Json;
    Ok(match collection {
        Collection::Blog => {
            let posts = queries.related_posts(slug, limit).await?;
            if json {
                ConsoleFormatter::json(&posts)
            } else {
                ConsoleFormatter::related_posts(slug, &posts)
            }
        }
        Collection::Work => {
            let projects = queries.related_projects(slug, limit).await?;
            if json {
                ConsoleFormatter::json(&projects)
            } else {
                ConsoleFormatter::related_projects(slug, &projects)
            }
        }
    })
}

fn blog_query(args: &ContentArgs) -> BlogQuery {
    BlogQuery {
        search: args.search.clone(),
        category: args.category.clone(),
        tag: args.tag.clone(),
        author: args.author.clone(),
        featured_only: args.featured,
        ..BlogQuery::page(args.page)
    }
}

fn work_query(args: &ContentArgs) -> WorkQuery {
    WorkQuery {
        search: args.search.clone(),
        service: args.service.clone(),
        industry: args.industry.clone(),
        company: args.company.clone(),
        featured_only: args.featured,
        ..WorkQuery::page(args.page)
    }
}

fn preview_prefill(query: &str, site: &SiteConfig, output: OutputFormat) {
    let now = Utc::now();
    let prefill = PrefillContext::from_query(query, now, site.prefill_ttl());
    let wizard = ServiceRequestWizard::new(prefill, now);
    let view = WizardView::from(&wizard);
    let services: Vec<&str> = wizard
        .form()
        .services()
        .map(|s| s.display_name())
        .collect();

    match output {
        OutputFormat::Text => print!(
            "{}",
            ConsoleFormatter::wizard_preview(wizard.prefill(), &services, &view)
        ),
        OutputFormat::Json => println!(
            "{}",
            ConsoleFormatter::json(&json!({
                "prefill": wizard.prefill(),
                "services": services,
                "view": view,
            }))
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agency_domain::ConfigIssueCode;

    #[test]
    fn test_config_errors_fail_check() {
        let warning = ConfigIssue::warning(ConfigIssueCode::MissingVerifierSecret, "no secret");
        assert!(ensure_no_config_errors(&[warning.clone()]).is_ok());

        let error = ConfigIssue::error(ConfigIssueCode::InvalidBindAddress, "bad bind");
        let err = ensure_no_config_errors(&[warning, error]).unwrap_err();
        assert_eq!(err.to_string(), "configuration has 1 error(s)");
    }
}
