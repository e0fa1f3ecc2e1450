use chrono::NaiveDate;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::{core::daily::DayOfWeekCost, plan::PlanRegistry, quantity::cost::Cost};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(header);
    table
}

#[must_use]
pub fn build_daily_costs_table(daily_costs: &[(NaiveDate, Cost)], total: Cost) -> Table {
    let mut table = new_table(vec!["Date", "Cost"]);
    for (date, cost) in daily_costs {
        table.add_row(vec![
            Cell::new(date),
            Cell::new(cost).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(total).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
    ]);
    table
}

#[must_use]
pub fn build_day_of_week_table(costs: &[DayOfWeekCost]) -> Table {
    let mut table = new_table(vec!["Day", "Readings", "Cost", "Plan rank"]);
    for day in costs {
        table.add_row(vec![
            Cell::new(day.day_of_week),
            Cell::new(day.readings.len()).set_alignment(CellAlignment::Right),
            Cell::new(day.cost).set_alignment(CellAlignment::Right),
            match day.plan_rank {
                Some(0) => Cell::new("1st").fg(Color::Green),
                Some(rank) => Cell::new(format!("#{}", rank + 1)),
                None => Cell::new("—").add_attribute(Attribute::Dim),
            },
        ]);
    }
    table
}

#[must_use]
pub fn build_comparison_table(
    costs: &[(&str, Cost)],
    registry: &PlanRegistry,
    current_plan: Option<&str>,
) -> Table {
    let cheapest = costs.iter().map(|(_, cost)| *cost).min();
    let mut table = new_table(vec!["Plan", "Unit rate", "Cost"]);
    for (name, cost) in costs.iter().sorted_by_key(|(_, cost)| *cost) {
        let mut name_cell = Cell::new(name);
        if current_plan == Some(*name) {
            name_cell = name_cell.add_attribute(Attribute::Bold);
        }
        let unit_rate =
            registry.get(name).map_or_else(String::new, |plan| plan.unit_rate.to_string());
        table.add_row(vec![
            name_cell,
            Cell::new(unit_rate).set_alignment(CellAlignment::Right),
            Cell::new(cost).set_alignment(CellAlignment::Right).fg(if Some(*cost) == cheapest {
                Color::Green
            } else {
                Color::Reset
            }),
        ]);
    }
    table
}
