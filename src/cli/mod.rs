use std::fs;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Arg, ArgAction, Command};
use tracing::{error, info};

use crate::{BudgetLevel, PlannerConfig, TripDocument, TripPlanner, TripRequest};

/// CLI entry point for the trip-concierge tool
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = Command::new("trip-concierge")
        .version("0.1.0")
        .about("Generate an AI travel plan: destination guide, itinerary, budget, packing list")
        .arg(
            Arg::new("from")
                .long("from")
                .value_name("CITY")
                .help("Where the trip starts (arrival/departure logistics are planned from here)")
                .required(true),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .value_name("CITY")
                .help("Destination city")
                .required(true),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .value_name("YYYY-MM-DD")
                .help("First day of the trip")
                .required(true),
        )
        .arg(
            Arg::new("end")
                .long("end")
                .value_name("YYYY-MM-DD")
                .help("Day the trip ends (must be after the start date)")
                .required(true),
        )
        .arg(
            Arg::new("travelers")
                .long("travelers")
                .value_name("COUNT")
                .help("Number of travelers")
                .default_value("2"),
        )
        .arg(
            Arg::new("budget")
                .long("budget")
                .value_name("LEVEL")
                .help("Budget tier: budget, mid-range, or luxury")
                .default_value("mid-range"),
        )
        .arg(
            Arg::new("prefs")
                .long("prefs")
                .value_name("LIST")
                .help("Comma-separated interests (e.g. Culture,Food,Nature)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("PATH")
                .help("Write the full plan as formatted JSON (pass a path, or omit the value to use a generated file name)")
                .num_args(0..=1)
                .default_missing_value(""),
        )
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .help("OpenRouter API key (or set OPENAI_API_KEY env var)"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("OpenRouter base URL (or set OPENAI_BASE_URL / OPENROUTER_BASE_URL env vars)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print the share summary")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut config = match matches.get_one::<String>("api-key") {
        Some(key) => PlannerConfig::new(key.clone()),
        None => PlannerConfig::from_env()?,
    };
    if let Some(base_url) = matches.get_one::<String>("base-url") {
        config = config.with_base_url(base_url.clone());
    }

    let start: NaiveDate = matches
        .get_one::<String>("start")
        .unwrap()
        .parse()
        .context("--start must be a YYYY-MM-DD date")?;
    let end: NaiveDate = matches
        .get_one::<String>("end")
        .unwrap()
        .parse()
        .context("--end must be a YYYY-MM-DD date")?;
    let travelers: u32 = matches
        .get_one::<String>("travelers")
        .unwrap()
        .parse()
        .context("--travelers must be a positive integer")?;
    let budget: BudgetLevel = matches.get_one::<String>("budget").unwrap().parse()?;
    let preferences: Vec<String> = matches
        .get_one::<String>("prefs")
        .map(|list| {
            list.split(',')
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let request = TripRequest::for_dates(
        matches.get_one::<String>("from").unwrap().clone(),
        matches.get_one::<String>("to").unwrap().clone(),
        start,
        end,
        travelers,
        budget,
        preferences,
    )?;

    info!(
        "Planning {} -> {} ({} days, {} travelers, {})",
        request.origin, request.destination, request.day_count, request.traveler_count,
        request.budget_level
    );

    let planner = TripPlanner::new(config)?;
    let plan = planner.plan_trip(&request).await;

    for message in &plan.errors {
        error!("Document generation failed: {}", message);
    }

    let document = TripDocument::new(&request, plan);

    if !matches.get_flag("quiet") {
        print_report(&document);
    }
    println!("{}", document.share_summary());

    if let Some(path) = matches.get_one::<String>("output") {
        let path = if path.is_empty() {
            document.file_name()
        } else {
            path.clone()
        };
        fs::write(&path, document.to_pretty_json()?)
            .with_context(|| format!("failed to write {path}"))?;
        println!("Saved full plan to {path}");
    }

    Ok(())
}

fn print_report(document: &TripDocument) {
    println!(
        "\n=== {} -> {} | {} ===\n",
        document.origin, document.destination, document.dates
    );

    if let Some(description) = document
        .plan
        .insights
        .get("description")
        .and_then(|value| value.as_str())
    {
        println!("{description}\n");
    }

    for day in &document.plan.itinerary {
        println!("Day {} - {} ({})", day.day, day.day_of_week, day.date);
        if !day.title.is_empty() {
            println!("  {}", day.title);
        }
        for activity in day
            .morning
            .iter()
            .chain(day.afternoon.iter())
            .chain(day.evening.iter())
        {
            println!("  {} - {}", activity.time, activity.activity);
        }
        if day.total_cost > 0.0 {
            println!("  Daily budget: ${:.0}", day.total_cost);
        }
        println!();
    }

    if let Some(total) = document
        .plan
        .budget
        .get("total_all_travelers")
        .and_then(|value| value.as_f64())
    {
        println!("Estimated total for the party: ${total:.0}\n");
    }

    if !document.plan.packing.is_empty() {
        println!("Packing list:");
        for (category, items) in &document.plan.packing {
            println!("  {category}: {}", items.join("; "));
        }
        println!();
    }
}
