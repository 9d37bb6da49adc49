use clap::{Parser, Subcommand};

/// Returns the version string, including git hash and commit date for
/// non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "knowhow", bin_name = "knowhow", version = get_version())]
#[command(about = "Track the techniques you actually reuse", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a new usage note
    #[command(alias = "a")]
    Add {
        /// The technique or method to remember
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        content: Vec<String>,
    },

    /// List notes, optionally searched or filtered by confirmation
    #[command(alias = "ls")]
    List {
        /// Case-insensitive search over note content
        #[arg(short, long)]
        search: Option<String>,

        /// Show only confirmed notes (used 3+ times)
        #[arg(long, conflicts_with = "unconfirmed")]
        confirmed: bool,

        /// Show only notes not yet confirmed
        #[arg(long)]
        unconfirmed: bool,
    },

    /// View one or more notes in full, comments included
    #[command(alias = "v")]
    View {
        /// Positions from the list (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        positions: Vec<usize>,
    },

    /// Record another successful use of one or more notes
    #[command(alias = "u")]
    Used {
        /// Positions from the list (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        positions: Vec<usize>,
    },

    /// Rewrite a note's content
    #[command(alias = "e")]
    Edit {
        /// Position from the list
        position: usize,

        /// The replacement content
        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,
    },

    /// Delete one or more notes (asks for confirmation)
    #[command(alias = "rm")]
    Delete {
        /// Positions from the list (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        positions: Vec<usize>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Move a note to a new position in the list
    #[command(alias = "mv")]
    Move {
        /// Current position
        from: usize,

        /// Target position
        to: usize,
    },

    /// Attach a comment to a note
    #[command(alias = "c")]
    Comment {
        /// Position from the list
        position: usize,

        /// The comment text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Remove a comment from a note
    Uncomment {
        /// Position from the list
        position: usize,

        /// Which comment to remove (1 = oldest)
        comment: usize,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
