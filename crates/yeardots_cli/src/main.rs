//! Developer CLI for the Year Dots core.
//!
//! # Responsibility
//! - Inspect progress and the dot grid for any date without a device.
//! - Render a wallpaper PNG through the same export path the app uses.

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;
use yeardots_core::{
    init_stderr_logging, layout_grid, AccentColor, CanvasSize, DayState, DotShape, DotSize,
    GridLayout, GridOffset, OffsetBounds, PngFileSink, SettingsUpdate, WallpaperController,
    WallpaperService, WallpaperSettings, YearProgress,
};

#[derive(Parser, Debug)]
#[command(name = "yeardots", version, about = "Year dot grid inspector and wallpaper renderer")]
struct Cli {
    /// Log level written to stderr (trace|debug|info|warn|error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print day ordinal, days left and percent elapsed.
    Progress {
        /// Date as YYYY-MM-DD; defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Print the dot grid as text (`#` past, `@` today, `.` future).
    Grid {
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, default_value = "STANDARD", value_parser = parse_layout)]
        layout: GridLayout,
    },
    /// Render the wallpaper PNG and overlay sidecar into a directory.
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Output directory.
    #[arg(long)]
    out: PathBuf,
    #[arg(long, default_value_t = 1080)]
    width: u32,
    #[arg(long, default_value_t = 2340)]
    height: u32,
    #[arg(long)]
    date: Option<NaiveDate>,
    #[arg(long, default_value = "STANDARD", value_parser = parse_layout)]
    layout: GridLayout,
    #[arg(long, default_value = "ROUNDED", value_parser = parse_shape)]
    shape: DotShape,
    #[arg(long, default_value = "MEDIUM", value_parser = parse_size)]
    size: DotSize,
    #[arg(long, default_value = "#4ADE80", value_parser = parse_color)]
    color: AccentColor,
    /// Pixel density multiplier.
    #[arg(long, default_value_t = 3.0)]
    scale: f32,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    offset_x: f32,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    offset_y: f32,
    #[arg(long)]
    caption: Option<String>,
    #[arg(long)]
    hide_stats: bool,
    /// Target only the home screen instead of home and lock.
    #[arg(long)]
    home_only: bool,
}

fn parse_layout(value: &str) -> Result<GridLayout, String> {
    GridLayout::parse(value).map_err(|err| err.to_string())
}

fn parse_shape(value: &str) -> Result<DotShape, String> {
    DotShape::parse(value).map_err(|err| err.to_string())
}

fn parse_size(value: &str) -> Result<DotSize, String> {
    DotSize::parse(value).map_err(|err| err.to_string())
}

fn parse_color(value: &str) -> Result<AccentColor, String> {
    AccentColor::parse(value).map_err(|err| err.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = init_stderr_logging(&cli.log_level) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Progress { date } => {
            let progress = YearProgress::for_date(resolve_date(date));
            println!(
                "{} day {}/{}: {} days left, {}%",
                progress.year,
                progress.day_of_year,
                progress.total_days,
                progress.days_remaining,
                progress.percent
            );
        }
        Command::Grid { date, layout } => {
            let progress = YearProgress::for_date(resolve_date(date));
            let grid = layout_grid(progress.total_days, progress.day_of_year, layout.columns());
            for row in &grid.rows {
                let line: String = row
                    .iter()
                    .map(|cell| match cell.state {
                        DayState::Past => '#',
                        DayState::Today => '@',
                        DayState::Future => '.',
                    })
                    .collect();
                println!("{line}");
            }
        }
        Command::Render(args) => render(args)?,
    }
    Ok(())
}

fn render(args: RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller =
        WallpaperController::new(WallpaperSettings::default(), OffsetBounds::default());
    for update in [
        SettingsUpdate::Layout(args.layout),
        SettingsUpdate::Shape(args.shape),
        SettingsUpdate::Size(args.size),
        SettingsUpdate::Accent(args.color),
        SettingsUpdate::Scale(args.scale),
        SettingsUpdate::Offset(GridOffset {
            x: args.offset_x,
            y: args.offset_y,
        }),
        SettingsUpdate::CustomText(args.caption.unwrap_or_default()),
        SettingsUpdate::ShowStats(!args.hide_stats),
        SettingsUpdate::ApplyBothTargets(!args.home_only),
    ] {
        controller.apply(update);
    }

    let snapshot = controller.snapshot_for(resolve_date(args.date));
    let service = WallpaperService::new(PngFileSink::new(args.out.clone()));
    let target = service.set_wallpaper(
        &snapshot.settings,
        &snapshot.progress,
        CanvasSize::new(args.width, args.height),
    )?;

    info!(
        "event=cli_render module=cli status=ok target={} width={} height={} out={}",
        target.as_str(),
        args.width,
        args.height,
        args.out.display()
    );
    println!(
        "wrote {} (target={}, flag={})",
        service.sink().image_path().display(),
        target.as_str(),
        target.flag()
    );
    Ok(())
}

fn resolve_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::{render, run, Cli, Command};
    use clap::Parser;

    #[test]
    fn render_subcommand_writes_png_into_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("wall");
        let cli = Cli::try_parse_from([
            "yeardots",
            "render",
            "--out",
            out.to_str().unwrap(),
            "--width",
            "120",
            "--height",
            "260",
            "--date",
            "2024-02-29",
            "--layout",
            "calendar",
            "--offset-x",
            "-500",
        ])
        .unwrap();

        let Command::Render(args) = cli.command else {
            panic!("expected render subcommand");
        };
        assert_eq!(args.offset_x, -500.0);
        render(args).unwrap();
        assert!(out.join("yeardots-wallpaper.png").exists());
        assert!(out.join("yeardots-overlay.json").exists());
    }

    #[test]
    fn render_rejects_oversized_canvas() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            "yeardots",
            "render",
            "--out",
            dir.path().to_str().unwrap(),
            "--width",
            "100000",
        ])
        .unwrap();

        let err = run(cli.command).unwrap_err();
        assert!(err.to_string().contains("exceeds"), "{err}");
    }

    #[test]
    fn unknown_layout_is_a_parse_error() {
        assert!(Cli::try_parse_from(["yeardots", "grid", "--layout", "hexagon"]).is_err());
    }
}
