use crate::{
    config::{OutputFormat, PlannerConfig},
    planner::{estimate_budget, generate_itinerary},
    types::forms::{BudgetForm, FormNumber, ItineraryForm},
    PlannerError, Result, ToolRouter,
};
use chrono::NaiveDate;
use clap::{Arg, ArgAction, ArgMatches, Command};
use serde_json::Value;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// CLI entry point for the trip-planner tool
pub fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = command().get_matches();
    let config = resolve_config(&matches)?;
    info!(
        "Using format '{}' and currency '{}'",
        config.format, config.currency_symbol
    );

    match execute(&matches, &config) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            error!("Planner command failed: {}", e);
            eprintln!("{}", serde_json::to_string_pretty(&e.to_error_payload())?);
            Err(e.into())
        }
    }
}

/// Command line definition
pub fn command() -> Command {
    Command::new("trip-planner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Estimate trip budgets and generate day-by-day itineraries")
        .subcommand_required(true)
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format: text or json (or set TRIP_PLANNER_FORMAT)")
                .global(true),
        )
        .arg(
            Arg::new("currency")
                .short('c')
                .long("currency")
                .value_name("SYMBOL")
                .help("Currency symbol used in text output (or set TRIP_PLANNER_CURRENCY)")
                .global(true),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Validate tool payloads against their JSON Schema")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("budget")
                .about("Estimate the cost of a trip")
                .arg(count_arg("duration", 'd', "Trip length in days"))
                .arg(count_arg("travelers", 'n', "Number of travelers"))
                .arg(text_arg("destination", "Destination label"))
                .arg(text_arg("accommodation", "Accommodation tier: budget, mid, luxury"))
                .arg(text_arg("meals", "Meal tier: budget, mid, luxury"))
                .arg(text_arg("transport", "Transport tier: local, private, luxury"))
                .arg(text_arg("activities", "Activity tier: low, medium, high"))
                .arg(text_arg(
                    "shopping",
                    "Shopping tier: none, minimal, moderate, extensive",
                )),
        )
        .subcommand(
            Command::new("itinerary")
                .about("Generate a day-by-day itinerary")
                .arg(
                    Arg::new("start")
                        .short('s')
                        .long("start")
                        .value_name("YYYY-MM-DD")
                        .help("First day of the trip")
                        .required(true),
                )
                .arg(
                    Arg::new("end")
                        .short('e')
                        .long("end")
                        .value_name("YYYY-MM-DD")
                        .help("Last day of the trip, inclusive")
                        .required(true),
                )
                .arg(count_arg("travelers", 'n', "Number of travelers"))
                .arg(text_arg("budget", "Budget tier: budget, mid, luxury"))
                .arg(text_arg("destination", "Destination label"))
                .arg(
                    Arg::new("interest")
                        .short('i')
                        .long("interest")
                        .value_name("INTEREST")
                        .help("Traveler interest; may be repeated")
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(Command::new("tools").about("Print the tool definitions as JSON"))
        .subcommand(
            Command::new("call")
                .about("Execute a tool with a raw JSON payload")
                .arg(Arg::new("tool").help("Tool name").required(true).index(1))
                .arg(
                    Arg::new("payload")
                        .help("JSON parameters")
                        .required(true)
                        .index(2),
                ),
        )
}

fn count_arg(name: &'static str, short: char, help: &'static str) -> Arg {
    Arg::new(name)
        .short(short)
        .long(name)
        .value_name("COUNT")
        .help(help)
        .allow_negative_numbers(true)
        .required(true)
}

fn text_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).value_name("VALUE").help(help)
}

/// Environment configuration with command line overrides applied
pub fn resolve_config(matches: &ArgMatches) -> Result<PlannerConfig> {
    let mut config = PlannerConfig::from_env()?;
    apply_overrides(&mut config, matches)?;
    Ok(config)
}

fn apply_overrides(config: &mut PlannerConfig, matches: &ArgMatches) -> Result<()> {
    if let Some(format) = matches.get_one::<String>("format") {
        config.format = format.parse()?;
    }
    if let Some(symbol) = matches.get_one::<String>("currency") {
        config.currency_symbol = symbol.clone();
    }
    if matches.get_flag("strict") {
        config.strict_validation = true;
    }
    Ok(())
}

/// Run the selected subcommand and render its output
pub fn execute(matches: &ArgMatches, config: &PlannerConfig) -> Result<String> {
    let router = ToolRouter::with_default_tools(config)?;

    match matches.subcommand() {
        Some(("budget", sub)) => {
            let form = budget_form(sub);
            match config.format {
                OutputFormat::Text => {
                    let estimate = estimate_budget(&form.into_parameters()?)?;
                    Ok(estimate.report(&config.currency_symbol))
                }
                OutputFormat::Json => {
                    render_json(&router.execute("budget_estimator", serde_json::to_value(&form)?)?)
                }
            }
        }
        Some(("itinerary", sub)) => {
            let form = itinerary_form(sub)?;
            match config.format {
                OutputFormat::Text => {
                    let itinerary = generate_itinerary(&form.into_input()?)?;
                    Ok(itinerary.report(&config.currency_symbol))
                }
                OutputFormat::Json => render_json(
                    &router.execute("itinerary_generator", serde_json::to_value(&form)?)?,
                ),
            }
        }
        Some(("tools", _)) => render_json(&Value::Array(router.tool_definitions()?)),
        Some(("call", sub)) => {
            let tool = required(sub, "tool")?;
            let payload: Value = serde_json::from_str(required(sub, "payload")?)?;
            render_json(&router.execute(tool, payload)?)
        }
        Some((other, _)) => Err(PlannerError::ToolNotFound(other.to_string())),
        None => Err(PlannerError::Config("no subcommand given".to_string())),
    }
}

fn render_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| PlannerError::Config(format!("missing argument '{}'", name)))
}

fn optional(matches: &ArgMatches, name: &str) -> Option<String> {
    matches.get_one::<String>(name).cloned()
}

fn budget_form(matches: &ArgMatches) -> BudgetForm {
    BudgetForm {
        destination: optional(matches, "destination"),
        duration: FormNumber::Text(optional(matches, "duration").unwrap_or_default()),
        travelers: FormNumber::Text(optional(matches, "travelers").unwrap_or_default()),
        accommodation: optional(matches, "accommodation"),
        meals: optional(matches, "meals"),
        transport: optional(matches, "transport"),
        activities: optional(matches, "activities"),
        shopping: optional(matches, "shopping"),
    }
}

fn itinerary_form(matches: &ArgMatches) -> Result<ItineraryForm> {
    Ok(ItineraryForm {
        destination: optional(matches, "destination"),
        start_date: parse_date("start", required(matches, "start")?)?,
        end_date: parse_date("end", required(matches, "end")?)?,
        travelers: FormNumber::Text(optional(matches, "travelers").unwrap_or_default()),
        budget_tier: optional(matches, "budget"),
        interests: matches
            .get_many::<String>("interest")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
    })
}

fn parse_date(field: &str, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
        PlannerError::Validation(format!(
            "{} must be a date like 2026-03-01, got '{}': {}",
            field, raw, e
        ))
    })
}
