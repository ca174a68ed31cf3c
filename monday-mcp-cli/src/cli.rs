use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use std::io;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "monday-mcp")]
#[command(version)]
#[command(about = "An MCP server exposing Monday.com boards, items and updates as tools")]
#[command(long_about = "
monday-mcp is an MCP (Model Context Protocol) server that lets AI assistants
read and change Monday.com boards, items and updates.

Configuration is read from the environment:
  MONDAY_API_KEY         API token (required)
  MONDAY_WORKSPACE_NAME  Workspace subdomain, e.g. acme for acme.monday.com
  MONDAY_WORKSPACE_URL   Workspace base URL, instead of MONDAY_WORKSPACE_NAME
  MONDAY_API_URL         GraphQL endpoint (default https://api.monday.com/v2)
  MONDAY_API_VERSION     Value of the API-Version header (optional)

Example usage:
  monday-mcp serve                 # Run as MCP server
  monday-mcp tools                 # List the available tools
  monday-mcp completion bash > ~/.bashrc.d/monday-mcp  # Generate bash completions
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server over stdio
    #[command(long_about = "
Runs monday-mcp as an MCP server on stdin/stdout. When stdin is not a
terminal, logs are written to ~/.monday-mcp/mcp.log (file name overridable
with MONDAY_MCP_LOG_FILE) so the protocol stream stays clean.

Example:
  monday-mcp serve
  # Or configure it as a stdio server in your MCP client
")]
    Serve,
    /// List the tools exposed by the server
    #[command(long_about = "
Lists every tool with its required and optional arguments.

Output formats:
  table  - Formatted table (default)
  json   - Tool definitions including input schemas, for scripting

Examples:
  monday-mcp tools
  monday-mcp tools --format json
")]
    Tools {
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Call a single tool against the Monday.com API
    #[command(long_about = "
Dispatches one tool call exactly as an MCP client would and prints the text
result. Exit codes:
  0 - The tool succeeded
  1 - The tool returned an error result (e.g. not found, API failure)
  2 - The call was malformed or configuration is missing

Examples:
  monday-mcp call list-boards
  monday-mcp call get-item-updates --args '{\"itemId\": \"1234567890\"}'
")]
    Call {
        /// Name of the tool to call
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(short, long)]
        args: Option<String>,
    },
    /// Generate shell completion scripts
    #[command(long_about = "
Generates shell completion scripts for various shells.

Examples:
  monday-mcp completion bash > ~/.bashrc.d/monday-mcp
  monday-mcp completion zsh > ~/.zfunc/_monday-mcp
  monday-mcp completion fish > ~/.config/fish/completions/monday-mcp.fish
")]
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    #[allow(dead_code)]
    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }

    pub fn is_tty() -> bool {
        io::stdout().is_terminal()
    }

    pub fn should_use_color() -> bool {
        Self::is_tty() && std::env::var("NO_COLOR").is_err()
    }
}
