// File: crates/chartrun/src/scripts.rs
// Summary: Built-in chart scripts: fixed data plus the sequence of chart requests to draw.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use chartrun_core::{load_table, CategoryTable, ChartError, ChartRequest, GridMode, Series};

use crate::cli::TableArgs;

/// Seven charts over inline data, one of each basic kind.
pub fn showcase() -> Vec<ChartRequest> {
    let x = Series::range(1, 10);
    let y = Series::from([2.5, 4.0, 5.5, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.5]);
    let z = Series::from([3.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0]);

    let k = x.slice(3, 7);
    println!("{}", format_values(k.values()));

    let matrix = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 9.0]];

    vec![
        ChartRequest::line(x.clone(), y.clone())
            .color("blue")
            .linestyle("-")
            .marker("")
            .markersize(5.0)
            .linewidth(2.0)
            .title("Line Plot")
            .xlabel("X Axis")
            .ylabel("Y Axis")
            .grid(GridMode::Both),
        ChartRequest::histogram(y.clone())
            .bins(10)
            .color("skyblue")
            .edgecolor("black")
            .density(false)
            .title("Histogram Example")
            .xlabel("Value")
            .ylabel("Frequency")
            .grid(GridMode::Both),
        ChartRequest::heatmap(matrix)
            .cmap("viridis")
            .interpolation("nearest")
            .aspect("auto")
            .title("Heatmap Example")
            .xlabel("X")
            .ylabel("Y")
            .colorbar(true),
        ChartRequest::bar(x.clone(), y.clone())
            .color("orange")
            .title("Bar Chart Example")
            .xlabel("Categories")
            .ylabel("Values")
            .grid(GridMode::YOnly),
        ChartRequest::pie([4.0, 2.5, 2.0, 10.0], ["Apples", "Bananas", "Cherries", "Dates"])
            .title("Pie Chart"),
        ChartRequest::scatter(x.clone(), y.clone())
            .color("blue")
            .marker("o")
            .size(100.0)
            .alpha(0.6)
            .title("Scatter Example")
            .xlabel("X")
            .ylabel("Y")
            .grid(GridMode::Both),
        ChartRequest::boxplot(vec![x, y, z])
            .tick_labels(["hello", "World", "May"])
            .notch(false)
            .vert(true)
            .patch_artist(true)
            .title("Box Plot Example")
            .xlabel("Groups")
            .ylabel("Values")
            .grid(GridMode::Both),
    ]
}

/// Scatter, box and pie charts; the pie uses a short color cycle and percentages.
pub fn scatter_box() -> Vec<ChartRequest> {
    let x = Series::range(1, 5);
    let y = Series::from([2.0, 4.0, 6.0, 8.0, 10.0]);
    let z = Series::from([3.0, 5.0, 7.0, 9.0, 11.0]);

    vec![
        ChartRequest::scatter(x.clone(), y.clone())
            .color("blue")
            .marker("o")
            .size(100.0)
            .alpha(0.6)
            .title("Scatter Plot Test")
            .xlabel("X-axis")
            .ylabel("Y-axis")
            .grid(GridMode::Both),
        ChartRequest::boxplot(vec![x, y, z])
            .notch(false)
            .vert(true)
            .patch_artist(true)
            .tick_labels(["X", "Y", "Z"])
            .title("Box Plot Test")
            .xlabel("Groups")
            .ylabel("Values")
            .grid(GridMode::Both),
        ChartRequest::pie([30.0, 20.0, 25.0, 15.0, 10.0], Vec::<String>::new())
            .colors(["gold", "skyblue", "lightgreen"])
            .autopct("%.1f%%")
            .startangle(140.0)
            .title("Pie Chart Test"),
    ]
}

/// Charts over two columns of a loaded table.
pub fn table(args: &TableArgs) -> Result<Vec<ChartRequest>> {
    let table = load_table(&args.input)
        .with_context(|| format!("failed to load table '{}'", args.input.display()))?;
    info!(rows = table.len(), columns = ?table.names().collect::<Vec<_>>(), "loaded table");
    table_requests(&table, args)
}

pub fn table_requests(table: &CategoryTable, args: &TableArgs) -> Result<Vec<ChartRequest>> {
    let y = table.numeric(&args.y)?;
    if y.is_empty() {
        anyhow::bail!("table '{}' has no data rows", args.input.display());
    }
    let mean = y.avg()?;
    info!(column = %args.y, mean, "y column");
    let title_y = args.y.as_str();

    let mut out = Vec::new();
    if args.dates {
        let x = parse_dates(table.column(&args.x)?, &args.x)?;
        out.push(
            ChartRequest::timeline(x, y.clone())
                .title(format!("{title_y} over time"))
                .xlabel(args.x.clone())
                .ylabel(args.y.clone()),
        );
    } else {
        match table.numeric(&args.x) {
            Ok(x) => {
                out.push(
                    ChartRequest::line(x.clone(), y.clone())
                        .marker("o")
                        .title(format!("{title_y} by {}", args.x))
                        .xlabel(args.x.clone())
                        .ylabel(args.y.clone()),
                );
                out.push(
                    ChartRequest::scatter(x, y.clone())
                        .xlabel(args.x.clone())
                        .ylabel(args.y.clone()),
                );
            }
            Err(ChartError::ParseValue { .. }) => {
                let categories = table.column(&args.x)?;
                let positions = Series::range(1, categories.len() as i64);
                out.push(
                    ChartRequest::bar(positions, y.clone())
                        .tick_labels(categories.iter().cloned())
                        .title(format!("{title_y} by {}", args.x))
                        .xlabel(args.x.clone())
                        .ylabel(args.y.clone()),
                );
            }
            Err(e) => return Err(e.into()),
        }
    }

    let n = y.len() as i64;
    out.push(
        ChartRequest::histogram(y.clone())
            .edgecolor("black")
            .xlabel(args.y.clone()),
    );
    out.push(
        ChartRequest::line(Series::range(1, n), y.running_sum())
            .title(format!("Cumulative {title_y}"))
            .xlabel("Row")
            .ylabel(format!("Running sum of {title_y}")),
    );
    Ok(out)
}

/// `YYYY-MM-DD` cells to epoch seconds at UTC midnight.
fn parse_dates(cells: &[String], column: &str) -> Result<Series> {
    cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let date = NaiveDate::parse_from_str(cell.trim(), "%Y-%m-%d").map_err(|_| ChartError::ParseValue {
                column: column.to_string(),
                row: i + 1,
                value: cell.clone(),
            })?;
            let midnight = date.and_hms_opt(0, 0, 0).context("midnight is always valid")?;
            Ok(midnight.and_utc().timestamp() as f64)
        })
        .collect::<Result<Vec<f64>>>()
        .map(Series::new)
}

/// `[4, 5, 6, 7]`: integral values without a fractional part.
pub fn format_values(values: &[f64]) -> String {
    let items: Vec<String> = values
        .iter()
        .map(|v| if v.fract() == 0.0 && v.abs() < 1e15 { format!("{}", *v as i64) } else { v.to_string() })
        .collect();
    format!("[{}]", items.join(", "))
}
