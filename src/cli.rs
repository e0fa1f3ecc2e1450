use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    /// Price plans and account assignments.
    #[clap(long, env = "KILOWATCH_PLANS", default_value = "plans.toml")]
    pub plans: PathBuf,

    /// Meter reading histories.
    #[clap(long, env = "KILOWATCH_READINGS", default_value = "readings.json")]
    pub readings: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Cost of the trailing Sunday-to-Sunday week under the assigned plan.
    Weekly(WeeklyArgs),

    /// Cost per calendar day over the full history, with the summed total.
    Daily(DailyArgs),

    /// Day-of-week cost profile with the assigned plan's rank per day.
    Profile(ProfileArgs),

    /// Cost of the full history under every available plan.
    Compare(CompareArgs),
}

#[derive(Parser)]
pub struct WeeklyArgs {
    pub smart_meter_id: String,

    /// Reference date for the «last week» window. Defaults to today.
    #[clap(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Parser)]
pub struct DailyArgs {
    pub smart_meter_id: String,
}

#[derive(Parser)]
pub struct ProfileArgs {
    pub smart_meter_id: String,
}

#[derive(Parser)]
pub struct CompareArgs {
    pub smart_meter_id: String,
}
