//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use rfx_core::api::ApiClient;
use rfx_core::config::Config;
use rfx_core::{interrupt, logging};

mod commands;

#[derive(Parser)]
#[command(name = "rfx")]
#[command(version)]
#[command(about = "Terminal procurement console: RFPs, vendors, proposals and AI-drafted emails")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in as a backend user (stores the user id locally)
    Login {
        /// The backend user id to look up
        #[arg(value_name = "USER_ID")]
        user_id: String,
    },

    /// Clear the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Manage RFPs
    Rfps {
        #[command(subcommand)]
        command: RfpCommands,
    },

    /// Manage vendors
    Vendors {
        #[command(subcommand)]
        command: VendorCommands,
    },

    /// Inspect submitted proposals
    Proposals {
        #[command(subcommand)]
        command: ProposalCommands,
    },

    /// Show the AI vendor recommendation for an RFP
    Recommend {
        /// The RFP to compare proposals for
        #[arg(value_name = "RFP_ID")]
        rfp_id: String,
    },

    /// Send an RFP email to vendors (non-interactive)
    Send {
        /// The RFP to send
        #[arg(value_name = "RFP_ID")]
        rfp_id: String,

        /// Vendor ids to send to (default: all registered vendors)
        #[arg(long = "vendor", value_name = "VENDOR_ID")]
        vendors: Vec<String>,

        /// Subject line (required unless --generate)
        #[arg(long, conflicts_with = "generate")]
        subject: Option<String>,

        /// Email body (required unless --generate)
        #[arg(long, conflicts_with = "generate")]
        content: Option<String>,

        /// Generate the email template from the RFP before sending
        #[arg(long)]
        generate: bool,
    },

    /// Preview the generated email for an RFP (full-screen)
    Preview {
        /// The RFP to preview
        #[arg(value_name = "RFP_ID")]
        rfp_id: String,

        /// Vendor ids to send to (default: all registered vendors)
        #[arg(long = "vendor", value_name = "VENDOR_ID")]
        vendors: Vec<String>,
    },
}

#[derive(clap::Subcommand)]
enum RfpCommands {
    /// Lists the logged-in user's RFPs
    List,
    /// Shows a specific RFP with its structured requirements
    Show {
        /// The id of the RFP to show
        #[arg(value_name = "RFP_ID")]
        id: String,
    },
    /// Creates an RFP from a free-text procurement request
    Create {
        /// The procurement request text
        #[arg(value_name = "TEXT")]
        text: String,
    },
    /// Deletes an RFP
    Delete {
        /// The id of the RFP to delete
        #[arg(value_name = "RFP_ID")]
        id: String,
    },
}

#[derive(clap::Subcommand)]
enum VendorCommands {
    /// Lists vendors
    List {
        /// Page number (zero-based)
        #[arg(long, default_value_t = 0)]
        page: u32,

        /// Filter vendors by name
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Registers a vendor
    Add {
        /// Vendor name
        #[arg(value_name = "NAME")]
        name: String,
        /// Contact email
        #[arg(long)]
        email: Option<String>,
        /// Contact phone
        #[arg(long)]
        phone: Option<String>,
    },
    /// Updates a vendor
    Update {
        /// The id of the vendor to update
        #[arg(value_name = "VENDOR_ID")]
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Deletes a vendor
    Delete {
        /// The id of the vendor to delete
        #[arg(value_name = "VENDOR_ID")]
        id: String,
    },
}

#[derive(clap::Subcommand)]
enum ProposalCommands {
    /// Lists proposals
    List {
        /// Only proposals under this RFP-vendor link
        #[arg(long = "rfp-vendor", value_name = "RFP_VENDOR_ID")]
        rfp_vendor: Option<String>,
    },
    /// Deletes a proposal
    Delete {
        /// The id of the proposal to delete
        #[arg(value_name = "PROPOSAL_ID")]
        id: String,
    },
    /// Deletes every proposal under an RFP-vendor link
    Purge {
        /// The RFP-vendor link to purge
        #[arg(value_name = "RFP_VENDOR_ID")]
        rfp_vendor: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    interrupt::init();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load().context("load config")?;

    match cli.command {
        // The preview owns the terminal; everything else logs to stderr.
        Commands::Preview { rfp_id, vendors } => {
            let _guard = logging::init_tui()?;
            rfx_tui::run_preview(config, rfp_id, vendors)
        }
        command => {
            logging::init_cli();
            let api = ApiClient::new(&config)?;
            dispatch_api(command, &api, &config).await
        }
    }
}

async fn dispatch_api(command: Commands, api: &ApiClient, config: &Config) -> Result<()> {
    match command {
        Commands::Preview { .. } => unreachable!("handled in dispatch"),
        Commands::Login { user_id } => commands::login::login(api, &user_id).await,
        Commands::Logout => commands::login::logout(),
        Commands::Whoami => commands::login::whoami(),
        Commands::Rfps { command } => match command {
            RfpCommands::List => commands::rfps::list(api).await,
            RfpCommands::Show { id } => commands::rfps::show(api, &id).await,
            RfpCommands::Create { text } => commands::rfps::create(api, &text).await,
            RfpCommands::Delete { id } => commands::rfps::delete(api, &id).await,
        },
        Commands::Vendors { command } => match command {
            VendorCommands::List { page, search } => {
                commands::vendors::list(api, config, page, &search).await
            }
            VendorCommands::Add { name, email, phone } => {
                commands::vendors::add(api, &name, email.as_deref(), phone.as_deref()).await
            }
            VendorCommands::Update {
                id,
                name,
                email,
                phone,
            } => commands::vendors::update(api, &id, name, email, phone).await,
            VendorCommands::Delete { id } => commands::vendors::delete(api, &id).await,
        },
        Commands::Proposals { command } => match command {
            ProposalCommands::List { rfp_vendor } => {
                commands::proposals::list(api, rfp_vendor.as_deref()).await
            }
            ProposalCommands::Delete { id } => commands::proposals::delete(api, &id).await,
            ProposalCommands::Purge { rfp_vendor } => {
                commands::proposals::purge(api, &rfp_vendor).await
            }
        },
        Commands::Recommend { rfp_id } => commands::recommend::run(api, &rfp_id).await,
        Commands::Send {
            rfp_id,
            vendors,
            subject,
            content,
            generate,
        } => {
            commands::send::run(
                api,
                commands::send::SendOptions {
                    rfp_id,
                    vendor_ids: vendors,
                    subject,
                    content,
                    generate,
                },
            )
            .await
        }
    }
}
