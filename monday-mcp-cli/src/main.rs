use std::process;
mod cli;
mod completions;
mod error;
mod exit_codes;
mod logging;
mod signal_handler;
mod tools;

use clap::CommandFactory;
use cli::{Cli, Commands};
use error::handle_cli_result;
use exit_codes::{EXIT_FAILURE, EXIT_SUCCESS, EXIT_USAGE};
use is_terminal::IsTerminal;
use logging::LogOptions;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    // Fast path for help - avoid logging setup
    let Some(command) = cli.command else {
        let code = match Cli::command().print_help() {
            Ok(()) => EXIT_SUCCESS,
            Err(_) => EXIT_USAGE,
        };
        process::exit(code);
    };

    logging::init_logging(LogOptions {
        mcp_mode: matches!(command, Commands::Serve) && !std::io::stdin().is_terminal(),
        quiet: cli.quiet,
        debug: cli.debug,
        verbose: cli.verbose,
    });

    let exit_code = match command {
        Commands::Serve => {
            tracing::info!("Starting MCP server");
            run_server().await
        }
        Commands::Tools { format } => {
            tracing::debug!("Listing tools as {:?}", format);
            handle_cli_result(tools::run_tools_command(format))
        }
        Commands::Call { tool, args } => {
            tracing::debug!("Calling tool {}", tool);
            handle_cli_result(tools::run_call_command(tool, args).await)
        }
        Commands::Completion { shell } => {
            tracing::info!("Generating completion for {:?}", shell);
            run_completions(shell)
        }
    };

    process::exit(exit_code);
}

async fn run_server() -> i32 {
    use monday_mcp::{mcp::McpServer, MondayConfig};
    use rmcp::serve_server;
    use rmcp::transport::io::stdio;
    use tokio_util::sync::CancellationToken;

    let config = match MondayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            eprintln!("Error: {e}");
            return EXIT_USAGE;
        }
    };

    let server = match McpServer::new(config) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to create MCP server: {}", e);
            eprintln!("Error: {e}");
            return EXIT_USAGE;
        }
    };

    let ct = CancellationToken::new();
    let ct_clone = ct.clone();
    tokio::spawn(async move {
        signal_handler::shutdown_signal().await;
        ct_clone.cancel();
    });

    match serve_server(server, stdio()).await {
        Ok(running) => {
            tracing::info!("MCP server started successfully");

            tokio::select! {
                quit = running.waiting() => match quit {
                    Ok(reason) => tracing::info!("MCP client disconnected: {:?}", reason),
                    Err(e) => {
                        tracing::error!("MCP server task failed: {}", e);
                        return EXIT_FAILURE;
                    }
                },
                _ = ct.cancelled() => {
                    tracing::info!("Shutdown requested");
                }
            }

            tracing::info!("MCP server exited successfully");
            EXIT_SUCCESS
        }
        Err(e) => {
            tracing::error!("MCP server error: {}", e);
            EXIT_FAILURE
        }
    }
}

fn run_completions(shell: clap_complete::Shell) -> i32 {
    match completions::print_completion(shell) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            tracing::error!("Completion error: {}", e);
            EXIT_FAILURE
        }
    }
}
