use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use varblur::{BlurDirection, BlurProps, EffectHostView, EngineOpts, Frame};

#[derive(Parser, Debug)]
#[command(name = "varblur", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the blur-intensity gradient mask as a grayscale PNG.
    Mask(MaskArgs),
    /// Blur a PNG the way a host view would blur its backdrop.
    Apply(ApplyArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DirectionArg {
    TopClearBottom,
    BottomClearTop,
}

impl From<DirectionArg> for BlurDirection {
    fn from(d: DirectionArg) -> Self {
        match d {
            DirectionArg::TopClearBottom => BlurDirection::TopClearBottom,
            DirectionArg::BottomClearTop => BlurDirection::BottomClearTop,
        }
    }
}

#[derive(Parser, Debug)]
struct MaskArgs {
    #[arg(long, value_enum, default_value_t = DirectionArg::TopClearBottom)]
    direction: DirectionArg,

    /// Transition position along the axis, in [0, 1].
    #[arg(long, default_value_t = 0.0)]
    offset: f64,

    #[arg(long, default_value_t = 100)]
    width: u32,

    #[arg(long, default_value_t = 100)]
    height: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    /// Input PNG (the backdrop content).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Peak blur radius in logical units.
    #[arg(long, default_value_t = 20.0)]
    radius: f64,

    #[arg(long, value_enum, default_value_t = DirectionArg::TopClearBottom)]
    direction: DirectionArg,

    #[arg(long, default_value_t = 0.0)]
    offset: f64,

    /// Display pixel density the backdrop renders at.
    #[arg(long, default_value_t = 1.0)]
    density: f64,

    /// Props JSON (`maxBlurRadius`, `direction`, `startOffset`); overrides the flags above.
    #[arg(long)]
    props: Option<PathBuf>,

    /// Engine options JSON.
    #[arg(long)]
    opts: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Mask(args) => cmd_mask(args),
        Command::Apply(args) => cmd_apply(args),
    }
}

fn cmd_mask(args: MaskArgs) -> anyhow::Result<()> {
    let mask = varblur::generate(args.width, args.height, args.offset, args.direction.into())?;
    ensure_parent_dir(&args.out)?;
    mask.to_luma8()
        .save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_apply(args: ApplyArgs) -> anyhow::Result<()> {
    let opts = match &args.opts {
        Some(p) => EngineOpts::from_path(p)?,
        None => EngineOpts::default(),
    };
    let props = match &args.props {
        Some(p) => {
            let s = std::fs::read_to_string(p)
                .with_context(|| format!("read props '{}'", p.display()))?;
            BlurProps::from_json_str(&s)?
        }
        None => BlurProps {
            max_blur_radius: args.radius,
            direction: args.direction.into(),
            start_offset: args.offset,
        },
    };

    let img = image::open(&args.in_path)
        .with_context(|| format!("open image '{}'", args.in_path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    let backdrop = Frame::from_straight_rgba8(width, height, img.into_raw())?;

    let mut view = EffectHostView::new(&opts, props);
    view.push_child(move |f: &mut Frame| f.data.copy_from_slice(&backdrop.data));
    view.on_attach(args.density);

    let out = view.render(width, height)?;
    ensure_parent_dir(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &out.to_straight_rgba8(),
        out.width,
        out.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
