use clap::{Args, Parser, Subcommand};
use clientbook::model::{ClientDraft, ClientId, Status};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clientbook", version)]
#[command(about = "Manage client records in a terminal session", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json
    #[arg(long, env = "CLIENTBOOK_CONFIG_DIR", global = true)]
    pub config_dir: Option<PathBuf>,

    /// Start without the sample clients
    #[arg(long, global = true)]
    pub empty: bool,

    /// Delete without asking for confirmation
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// List clients, newest first
    #[command(alias = "ls")]
    List {
        /// Only show clients whose name, phone or email contains this
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search clients by name, phone or email
    Search { term: String },

    /// Show every field of one client
    Show { id: ClientId },

    /// Add a new client
    #[command(alias = "new")]
    Add(AddArgs),

    /// Edit a client; fields not given keep their current value
    Edit {
        id: ClientId,

        #[command(flatten)]
        fields: EditArgs,
    },

    /// Delete a client
    #[command(alias = "rm")]
    Delete { id: ClientId },

    /// Show total and per-status counts
    Stats,
}

#[derive(Args, Debug, PartialEq)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub email: Option<String>,

    /// new, active, pending or closed
    #[arg(long)]
    pub status: Option<Status>,

    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args, Debug, PartialEq)]
pub struct EditArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Pass "" to clear
    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub status: Option<Status>,

    /// Pass "" to clear
    #[arg(long)]
    pub notes: Option<String>,
}

impl From<AddArgs> for ClientDraft {
    fn from(args: AddArgs) -> Self {
        Self {
            name: args.name,
            phone: args.phone,
            email: args.email,
            status: args.status,
            notes: args.notes,
        }
    }
}

impl EditArgs {
    /// Overlay the given fields on a form pre-filled from the current record.
    pub fn apply_to(self, mut draft: ClientDraft) -> ClientDraft {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(phone) = self.phone {
            draft.phone = phone;
        }
        if let Some(email) = self.email {
            draft.email = Some(email);
        }
        if let Some(status) = self.status {
            draft.status = Some(status);
        }
        if let Some(notes) = self.notes {
            draft.notes = Some(notes);
        }
        draft
    }
}

/// One line typed into the interactive session.
#[derive(Parser, Debug)]
#[command(name = "clientbook", no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum SessionCommand {
    #[command(flatten)]
    Client(Commands),

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}
