use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qanda")]
#[command(about = "qanda event Q&A CLI")]
pub struct Cli {
    /// Server address
    #[arg(long, env = "QANDA_SERVER", default_value = "http://127.0.0.1:8080")]
    pub server: String,

    /// Path to the credentials file (default: ~/.qanda/credentials.json)
    #[arg(long, env = "QANDA_CREDENTIALS")]
    pub credentials: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the event types the server offers
    Types,
    /// Create a new event (prints the creator code)
    Create {
        /// Event name
        name: String,

        /// Event type (see `qanda types`)
        #[arg(long, short = 't')]
        event_type: String,

        /// Your username
        #[arg(long, short = 'u')]
        username: String,
    },
    /// Open an event you created
    Access {
        /// Event name
        event_name: String,

        /// Creator code (defaults to the stored one)
        #[arg(long)]
        code: Option<String>,
    },
    /// Join an event using an invite code
    Join {
        /// Event name
        event_name: String,

        /// Invite code
        invite_code: String,

        /// Your username (must match the invite)
        username: String,
    },
    /// Question commands (creator only)
    Question {
        #[command(subcommand)]
        question_cmd: QuestionCommand,
    },
    /// Invite commands (creator only)
    Invite {
        #[command(subcommand)]
        invite_cmd: InviteCommand,
    },
    /// Answer commands (participant)
    Answers {
        #[command(subcommand)]
        answers_cmd: AnswersCommand,
    },
    /// Show participant scores (creator only)
    Results {
        /// Event ID
        #[arg(long, short = 'e')]
        event: String,
    },
    /// Show which screen the stored session resolves to
    Status {
        /// Route to resolve, e.g. /dashboard or /event/<id>
        #[arg(long, default_value = "/")]
        route: String,

        /// Event name hint for the dashboard route
        #[arg(long)]
        event_name: Option<String>,
    },
    /// Forget the stored session
    Logout,
}

#[derive(Subcommand)]
pub enum QuestionCommand {
    /// Add a multiple-choice question
    Add {
        /// Event ID
        #[arg(long, short = 'e')]
        event: String,

        /// Question text
        #[arg(long)]
        text: String,

        /// Answer options (repeat 2-6 times)
        #[arg(long = "option", short = 'o')]
        options: Vec<String>,

        /// Zero-based index of the correct option
        #[arg(long, default_value_t = 0)]
        correct: usize,
    },
    /// Delete a question
    Delete {
        /// Event ID
        #[arg(long, short = 'e')]
        event: String,

        /// Question ID
        question_id: String,
    },
}

#[derive(Subcommand)]
pub enum InviteCommand {
    /// Invite a user to the event
    Add {
        /// Event ID
        #[arg(long, short = 'e')]
        event: String,

        /// Username to invite
        username: String,
    },
    /// Revoke an invite
    Delete {
        /// Event ID
        #[arg(long, short = 'e')]
        event: String,

        /// Invite code to revoke
        invite_code: String,
    },
    /// List invites for the event
    List {
        /// Event ID
        #[arg(long, short = 'e')]
        event: String,
    },
}

#[derive(Subcommand)]
pub enum AnswersCommand {
    /// Submit answers as `<question-id>=<option-index>` pairs
    Submit {
        /// Event ID
        #[arg(long, short = 'e')]
        event: String,

        /// Answers, e.g. q-1=0 q-2=2
        answers: Vec<String>,
    },
    /// Show your submission status
    Status {
        /// Event ID
        #[arg(long, short = 'e')]
        event: String,
    },
}
