use crate::cli::{Cli, OutputFormat};
use crate::error::{CliError, CliResult, IntoCliResult};
use crate::exit_codes::{EXIT_FAILURE, EXIT_SUCCESS, EXIT_USAGE};
use colored::*;
use monday_mcp::mcp::{BaseToolImpl, McpServer, ToolRegistry};
use monday_mcp::MondayConfig;
use serde_json::{Map, Value};
use tabled::{
    settings::{object::Rows, Color, Style},
    Table, Tabled,
};

#[derive(Tabled)]
struct ToolRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Required")]
    required: String,
    #[tabled(rename = "Description")]
    description: String,
}

fn tool_rows(registry: &ToolRegistry) -> Vec<ToolRow> {
    registry
        .list_tools()
        .into_iter()
        .map(|tool| {
            let required = tool
                .input_schema
                .get("required")
                .and_then(Value::as_array)
                .map(|fields| {
                    fields
                        .iter()
                        .filter_map(Value::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default();
            let description = tool
                .description
                .as_deref()
                .and_then(|d| d.lines().find(|line| !line.trim().is_empty()))
                .unwrap_or("")
                .trim()
                .to_string();

            ToolRow {
                name: tool.name.to_string(),
                required,
                description,
            }
        })
        .collect()
}

/// Render the catalog in the requested format
pub fn render_tools(
    registry: &ToolRegistry,
    format: OutputFormat,
    color: bool,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&registry.list_tools()).cli_general_error()
        }
        OutputFormat::Table => {
            let mut table = Table::new(tool_rows(registry));
            table.with(Style::modern());
            if color {
                table.modify(Rows::first(), Color::FG_BRIGHT_CYAN);
            }
            Ok(table.to_string())
        }
    }
}

pub fn run_tools_command(format: OutputFormat) -> CliResult<i32> {
    let output = render_tools(ToolRegistry::catalog(), format, Cli::should_use_color())?;
    println!("{output}");
    Ok(EXIT_SUCCESS)
}

/// Parse `--args`; absent means no arguments
pub fn parse_call_arguments(raw: Option<&str>) -> CliResult<Map<String, Value>> {
    let Some(raw) = raw else {
        return Ok(Map::new());
    };

    match serde_json::from_str::<Value>(raw).cli_validation_error()? {
        Value::Object(map) => Ok(map),
        other => Err(CliError::new(
            format!("--args must be a JSON object, got: {other}"),
            EXIT_USAGE,
        )),
    }
}

/// Outcome of a single dispatched call
#[derive(Debug, PartialEq, Eq)]
pub struct CallOutcome {
    pub exit_code: i32,
    pub text: String,
}

/// Dispatch one call; call-shape faults are usage errors
pub async fn call_tool(
    server: &McpServer,
    tool: &str,
    arguments: Map<String, Value>,
) -> CliResult<CallOutcome> {
    match server.dispatch(tool, arguments).await {
        Ok(result) => Ok(CallOutcome {
            exit_code: if result.is_error == Some(true) {
                EXIT_FAILURE
            } else {
                EXIT_SUCCESS
            },
            text: BaseToolImpl::result_text(&result),
        }),
        Err(e) if e.is_call_fault() => Err(CliError::validation(e)),
        Err(e) => Err(CliError::general(e)),
    }
}

pub async fn run_call_command(tool: String, args: Option<String>) -> CliResult<i32> {
    let arguments = parse_call_arguments(args.as_deref())?;
    let config = MondayConfig::from_env().cli_validation_error()?;
    let server = McpServer::new(config).cli_validation_error()?;

    let outcome = call_tool(&server, &tool, arguments).await?;
    if outcome.exit_code == EXIT_SUCCESS {
        println!("{}", outcome.text);
    } else if Cli::should_use_color() {
        eprintln!("{} {}", "Error:".red().bold(), outcome.text);
    } else {
        eprintln!("Error: {}", outcome.text);
    }
    Ok(outcome.exit_code)
}
