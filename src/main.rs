use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use strokepad::draw::{CairoSurface, Color, RecordingSurface, SurfaceOp, TRANSPARENT};
use strokepad::input::{InputState, Tool, parse_script};
use strokepad::replay::replay;
use strokepad::ui::{ICON_SIZE, ToolPalette};
use strokepad::{Config, util};

#[derive(Parser, Debug)]
#[command(name = "strokepad")]
#[command(version, about = "Vector sketch pad: replay pointer events through the drawing core")]
struct Cli {
    /// Event script to replay (one event per line: down/move/up X Y, tool, color, clear, cancel)
    script: PathBuf,

    /// Config file to use instead of ~/.config/strokepad/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Initial tool (line, rectangle, circle, pencil)
    #[arg(long, short = 't', value_name = "TOOL")]
    tool: Option<Tool>,

    /// Initial color (name or hex such as #ff8800)
    #[arg(long, value_name = "COLOR")]
    color: Option<Color>,

    /// Print the drawing primitives of the final canvas
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let source = fs::read_to_string(&cli.script)
        .with_context(|| format!("Failed to read script {}", cli.script.display()))?;
    let events = parse_script(&source)
        .with_context(|| format!("Invalid script {}", cli.script.display()))?;

    let mut state = InputState::from_config(&config);
    if let Some(tool) = cli.tool {
        state.set_tool(tool);
    }
    if let Some(color) = cli.color {
        state.set_color(color);
    }
    log::info!(
        "Replaying {} events with {} / {}",
        events.len(),
        state.current_tool(),
        util::color_to_name(&state.current_color())
    );

    let width = config.canvas.width as i32;
    let height = config.canvas.height as i32;
    let background = config.background_color().unwrap_or(TRANSPARENT);
    let mut canvas = cairo_surface(width, height, background)?;
    let mut preview = cairo_surface(ICON_SIZE as i32, ICON_SIZE as i32, TRANSPARENT)?;

    // Palette icons are painted once at startup
    let mut palette = ToolPalette::new(state.current_tool());
    let mut icons = palette
        .tools()
        .iter()
        .map(|_| cairo_surface(ICON_SIZE as i32, ICON_SIZE as i32, TRANSPARENT))
        .collect::<Result<Vec<_>>>()?;
    palette.render_icons(&mut icons, state.settings.icon_style);

    let stats = replay(&mut state, &mut palette, &events, &mut canvas, &mut preview);
    log::info!(
        "Replayed {} events: {} canvas redraws, {} preview redraws, {} selected",
        stats.events,
        stats.redraws,
        stats.preview_redraws,
        palette.selected()
    );

    println!("{} shape(s)", state.shapes().len());
    for (index, shape) in state.shapes().iter().enumerate() {
        println!("{:>3}: {}", index + 1, shape);
    }

    if cli.trace {
        let mut recorder = RecordingSurface::new();
        state.render(&mut recorder);
        for op in recorder.ops() {
            println!("{}", format_op(op));
        }
    }

    Ok(())
}

fn cairo_surface(width: i32, height: i32, background: Color) -> Result<CairoSurface> {
    let image = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
        .context("Failed to create canvas image surface")?;
    let ctx = cairo::Context::new(&image).context("Failed to create Cairo context")?;
    Ok(CairoSurface::with_background(ctx, background))
}

fn format_op(op: &SurfaceOp) -> String {
    match op {
        SurfaceOp::Clear => "clear".to_string(),
        SurfaceOp::BeginPath => "begin_path".to_string(),
        SurfaceOp::MoveTo(x, y) => format!("move_to {x} {y}"),
        SurfaceOp::LineTo(x, y) => format!("line_to {x} {y}"),
        SurfaceOp::Arc {
            cx,
            cy,
            radius,
            start,
            end,
        } => format!("arc {cx} {cy} {radius} {start:.4} {end:.4}"),
        SurfaceOp::Rect {
            x,
            y,
            width,
            height,
        } => format!("rect {x} {y} {width} {height}"),
        SurfaceOp::StrokeColor(color) => format!("stroke_color {color}"),
        SurfaceOp::LineWidth(width) => format!("line_width {width}"),
        SurfaceOp::LineCap(cap) => format!("line_cap {cap:?}"),
        SurfaceOp::Stroke => "stroke".to_string(),
    }
}
