use chrono::{Local, NaiveTime, TimeZone};
use clap::{Parser, crate_version};
use kilowatch::{
    cli::{Args, Command},
    config::{Config, read_readings},
    prelude::*,
    service::CostService,
    tables::{build_comparison_table, build_daily_costs_table, build_day_of_week_table},
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let (registry, accounts) = Config::read_from(&args.plans)?.try_into_registry()?;
    let store = read_readings(&args.readings)?;
    let service =
        CostService::builder().readings(&store).accounts(&accounts).plans(&registry).build();

    match args.command {
        Command::Weekly(args) => {
            // «Now» is decided here, at the boundary — never inside the engines.
            let date = args.date.unwrap_or_else(|| Local::now().date_naive());
            let reference = Local
                .from_local_datetime(&date.and_time(NaiveTime::MIN))
                .earliest()
                .context("the reference date does not exist in the local time zone")?;
            let cost = service.last_week_cost(&args.smart_meter_id, reference)?;
            info!(%reference, "computed the last-week cost");
            println!("{}: {cost}", args.smart_meter_id);
        }
        Command::Daily(args) => {
            let daily_costs = service.daily_costs(&args.smart_meter_id)?;
            let total = service.summed_daily_cost(&args.smart_meter_id)?;
            println!("{}", build_daily_costs_table(&daily_costs, total));
        }
        Command::Profile(args) => {
            let costs = service.day_of_week_costs(&args.smart_meter_id)?;
            println!("{}", build_day_of_week_table(&costs));
        }
        Command::Compare(args) => {
            let costs = service.cost_per_plan(&args.smart_meter_id)?;
            let current_plan = accounts.plan_name(&args.smart_meter_id);
            println!("{}", build_comparison_table(&costs, &registry, current_plan));
            // Comparison works for unassigned meters; only rank needs a plan.
            if current_plan.is_some()
                && let Some(rank) = service.current_plan_rank(&args.smart_meter_id)?
            {
                info!(rank, "ranked the current plan");
            }
        }
    }
    Ok(())
}
