use clap::{Parser, Subcommand};
use landyapp::api::SectionRef;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(
    name = "landy",
    bin_name = "landy",
    version,
    about = "Generate and edit AI-written landing pages from the terminal",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Load configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a new landing page from business context
    #[command(alias = "gen", display_order = 1)]
    Generate {
        /// Industry or market the business operates in
        #[arg(long)]
        industry: String,

        /// What the business sells or offers
        #[arg(long)]
        offer: String,

        /// Who the page should speak to
        #[arg(long = "audience")]
        target_audience: String,

        /// Voice of the copy (e.g. playful, professional, bold)
        #[arg(long = "tone")]
        brand_tone: String,

        /// Competitor site to crawl for brand context (best effort)
        #[arg(long, value_name = "URL")]
        competitor_url: Option<String>,

        /// Print the generated page as JSON instead of rendering it
        #[arg(long)]
        json: bool,
    },

    /// List all pages, newest first
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Print summaries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one page in full
    #[command(display_order = 3)]
    Show {
        /// Page id
        page: Uuid,

        /// Print the page document as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace a section's content
    #[command(display_order = 10)]
    Edit {
        /// Page id
        page: Uuid,

        /// Section id or 1-based position (e.g. 2)
        section: SectionRef,

        /// New content as a JSON object, replacing the old content wholesale
        #[arg(long, value_name = "JSON")]
        content: String,
    },

    /// Regenerate one section with fresh copy
    #[command(alias = "regen", display_order = 11)]
    Regenerate {
        /// Page id
        page: Uuid,

        /// Section id or 1-based position
        section: SectionRef,
    },

    /// Rearrange sections into the given order
    #[command(display_order = 12)]
    Reorder {
        /// Page id
        page: Uuid,

        /// Complete new order: every section exactly once (ids or positions)
        #[arg(required = true, num_args = 1..)]
        sections: Vec<SectionRef>,
    },

    /// Remove one section from a page
    #[command(display_order = 13)]
    RemoveSection {
        /// Page id
        page: Uuid,

        /// Section id or 1-based position
        section: SectionRef,
    },

    /// Mark a page as published
    #[command(display_order = 20)]
    Publish {
        /// Page id
        page: Uuid,
    },

    /// Delete a page permanently
    #[command(alias = "rm", display_order = 21)]
    Delete {
        /// Page id
        page: Uuid,
    },
}
