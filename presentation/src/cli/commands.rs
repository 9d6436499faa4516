//! CLI command definitions

use agency_domain::{OutputFormat, TaxonomyKind};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Content collection selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Collection {
    /// Blog posts
    Blog,
    /// Portfolio projects
    Work,
}

/// CLI arguments for agency-site
#[derive(Parser, Debug)]
#[command(name = "agency-site")]
#[command(author, version, about = "Agency marketing site: content queries and the public form endpoint")]
#[command(long_about = r#"
agency-site serves the public form endpoint (bot verification, then relay
delivery) and answers content queries over the blog and work collections.

Configuration files are loaded from (in priority order):
1. CF_TURNSTILE_SECRET_KEY / WEB3FORMS_*_FORM_KEY environment variables
2. AGENCY_SITE_* environment overrides (e.g. AGENCY_SITE_SERVER__BIND)
3. --config <path>     Explicit config file
4. ./site.toml         Project-level config
5. ~/.config/agency-site/config.toml   Global config

Example:
  agency-site serve --bind 0.0.0.0:8080
  agency-site content blog --tag rust --page 2
  agency-site taxonomy services
  agency-site prefill "service=website-design-development&package=business-website&hosting=true"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format for listings (text or json)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server hosting POST /api/form
    Serve {
        /// Address to bind, overriding [server] bind
        #[arg(long, value_name = "ADDR")]
        bind: Option<SocketAddr>,
    },

    /// List a content collection, filtered and paginated
    Content(ContentArgs),

    /// Show one item by slug
    Show {
        #[arg(value_enum)]
        collection: Collection,
        slug: String,
    },

    /// List a taxonomy (categories, tags, services, industries)
    Taxonomy {
        kind: TaxonomyKind,
        /// Only the N most used labels
        #[arg(long, value_name = "N")]
        top: Option<usize>,
    },

    /// Items related to the given one
    Related {
        #[arg(value_enum)]
        collection: Collection,
        slug: String,
        #[arg(short, long, default_value_t = 3)]
        limit: usize,
    },

    /// Preview the service-request wizard for a pricing-page query string
    Prefill {
        /// Query string, with or without the leading '?'
        query: String,
    },

    /// Validate configuration and report every issue
    CheckConfig,
}

#[derive(Args, Debug)]
pub struct ContentArgs {
    #[arg(value_enum)]
    pub collection: Collection,

    /// 1-based page number
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Free-text search over titles, descriptions and labels
    #[arg(short, long)]
    pub search: Option<String>,

    /// Blog: only posts in this category (name or slug)
    #[arg(long)]
    pub category: Option<String>,

    /// Blog: only posts with this tag (name or slug)
    #[arg(long)]
    pub tag: Option<String>,

    /// Blog: only posts by this author
    #[arg(long)]
    pub author: Option<String>,

    /// Work: only projects offering this service (name or slug)
    #[arg(long)]
    pub service: Option<String>,

    /// Work: only projects in this industry (name or slug)
    #[arg(long)]
    pub industry: Option<String>,

    /// Work: only projects for this company
    #[arg(long)]
    pub company: Option<String>,

    /// Only featured items
    #[arg(long)]
    pub featured: bool,
}
