use clap::{Parser, Subcommand};

/// Command-line interface definition for frontdesk
/// Reception desk log: visitors, deliveries and the company directory, stored in SQLite
#[derive(Parser)]
#[command(
    name = "frontdesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "A reception desk CLI: visitor check-in/out, incoming deliveries and the company directory",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Visitor check-in / check-out log
    #[command(subcommand)]
    Visitor(VisitorCommand),

    /// Deliveries waiting at reception
    #[command(subcommand)]
    Delivery(DeliveryCommand),

    /// Company directory
    #[command(subcommand)]
    Company(CompanyCommand),

    /// Show today's counters
    Dashboard,

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum VisitorCommand {
    /// Check a visitor in
    Add {
        /// Visitor's full name (required)
        #[arg(long)]
        name: Option<String>,

        /// Person being visited (required)
        #[arg(long)]
        host: Option<String>,

        /// Floor the visitor is going to (required)
        #[arg(long)]
        floor: Option<String>,

        /// Where the visitor comes from
        #[arg(long)]
        company: Option<String>,

        /// Purpose of the visit (default from config)
        #[arg(long)]
        purpose: Option<String>,
    },

    /// List visitors, newest first
    List {
        #[arg(long, short, default_value_t = 1, help = "Page to show (1-based)")]
        page: usize,
    },

    /// Check a visitor out
    Checkout { id: String },

    /// Delete a visitor who already left
    Delete {
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum DeliveryCommand {
    /// Record an incoming delivery
    Add {
        /// Person the delivery is for (required)
        #[arg(long)]
        recipient: Option<String>,

        #[arg(long)]
        company: Option<String>,

        /// document, package or food (default from config)
        #[arg(long = "type")]
        kind: Option<String>,

        /// Sender or courier
        #[arg(long)]
        sender: Option<String>,
    },

    /// List deliveries, newest first
    List {
        #[arg(long, short, default_value_t = 1, help = "Page to show (1-based)")]
        page: usize,
    },

    /// Hand a delivery over to its recipient
    Pickup { id: String },

    /// Delete a delivery record
    Delete {
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum CompanyCommand {
    /// Add a company to the directory
    Add {
        /// Company name (required)
        #[arg(long)]
        name: Option<String>,

        /// Floor (required)
        #[arg(long)]
        floor: Option<String>,

        #[arg(long)]
        room: Option<String>,

        #[arg(long)]
        hotline: Option<String>,

        /// Contact person
        #[arg(long = "contact")]
        contact: Option<String>,
    },

    /// List companies, optionally searching name and floor
    List {
        #[arg(long, short, help = "Case-insensitive search on name or floor")]
        search: Option<String>,

        #[arg(long, short, default_value_t = 1, help = "Page to show (1-based)")]
        page: usize,
    },

    /// Remove a company from the directory
    Delete {
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
