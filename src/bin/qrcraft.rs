use clap::{Args, Parser, Subcommand};
use qrcraft::batch::{BATCH_ARCHIVE_NAME, BatchSettings, generate_batch};
use qrcraft::tools::{
    load_logo_file, load_options, load_request, load_rgba, read_batch_input, write_artifact,
};
use qrcraft::{
    Color, ECLevel, EyeStyle, ExportFormat, Generator, ModuleGrid, QrKind, QrRequest,
    RenderOptions, ShapeStyle, format_payload,
};
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "qrcraft", version, about = "QR code generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the payload string a request encodes to
    Format {
        #[command(flatten)]
        request: RequestArgs,
    },
    /// Render a request and write it as PNG, SVG or PDF
    Generate {
        #[command(flatten)]
        request: RequestArgs,
        #[command(flatten)]
        style: StyleArgs,
        #[arg(long, default_value = "png", value_parser = parse_value::<ExportFormat>)]
        format: ExportFormat,
        /// Image stamped on the center of PNG output
        #[arg(long)]
        logo: Option<PathBuf>,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// One PNG per non-blank input line, packed into a ZIP archive
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Apply a module shape style to an existing QR image
    Restyle {
        #[arg(long)]
        image: PathBuf,
        #[arg(long, value_parser = parse_value::<ShapeStyle>)]
        style: ShapeStyle,
        #[arg(long, env = "QRCRAFT_COLOR", default_value = "#000000", value_parser = parse_value::<Color>)]
        color: Color,
        #[arg(long, env = "QRCRAFT_BACKGROUND", default_value = "#ffffff", value_parser = parse_value::<Color>)]
        background: Color,
        #[arg(long)]
        out: PathBuf,
    },
}

/// Request from a JSON file or from `--type`/`--content`
#[derive(Args)]
struct RequestArgs {
    /// JSON request file; overrides --type/--content
    #[arg(long)]
    request: Option<PathBuf>,
    #[arg(long = "type", default_value = "url")]
    kind: String,
    #[arg(long)]
    content: Option<String>,
}

/// Render options; flags override values from --options
#[derive(Args)]
struct StyleArgs {
    /// JSON render options file
    #[arg(long)]
    options: Option<PathBuf>,
    #[arg(long, env = "QRCRAFT_COLOR", value_parser = parse_value::<Color>)]
    color: Option<Color>,
    #[arg(long, env = "QRCRAFT_BACKGROUND", value_parser = parse_value::<Color>)]
    background: Option<Color>,
    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    margin: Option<u32>,
    #[arg(long, value_parser = parse_value::<ECLevel>)]
    ec: Option<ECLevel>,
    #[arg(long, value_parser = parse_value::<ShapeStyle>)]
    shape: Option<ShapeStyle>,
    #[arg(long, value_parser = parse_value::<EyeStyle>)]
    eye: Option<EyeStyle>,
    #[arg(long, value_parser = parse_value::<EyeStyle>)]
    eye_ball: Option<EyeStyle>,
    /// Derive the shape grid from the encoded symbol
    #[arg(long)]
    exact_grid: bool,
}

fn parse_value<T: FromStr<Err = qrcraft::Error>>(s: &str) -> Result<T, String> {
    s.parse::<T>().map_err(|err| err.to_string())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Format { request } => format_cmd(&request),
        Command::Generate {
            request,
            style,
            format,
            logo,
            out_dir,
        } => generate_cmd(&request, &style, format, logo.as_deref(), &out_dir),
        Command::Batch { input, out_dir } => batch_cmd(&input, &out_dir),
        Command::Restyle {
            image,
            style,
            color,
            background,
            out,
        } => restyle_cmd(&image, style, color, background, &out),
    };

    if let Err(err) = result {
        log::error!("{err}");
        eprintln!("Failed to generate QR code. Please try again.");
        std::process::exit(1);
    }
}

fn build_request(args: &RequestArgs) -> qrcraft::Result<QrRequest> {
    if let Some(path) = &args.request {
        return load_request(path);
    }
    let content = args.content.clone();
    Ok(match args.kind.parse::<QrKind>() {
        Ok(kind) => QrRequest::from_content(kind, content),
        Err(_) => QrRequest::Other {
            kind: args.kind.clone(),
            content,
        },
    })
}

fn build_options(args: &StyleArgs) -> qrcraft::Result<RenderOptions> {
    let mut options = match &args.options {
        Some(path) => load_options(path)?,
        None => RenderOptions::default(),
    };
    if let Some(color) = args.color {
        options.foreground = color;
    }
    if let Some(background) = args.background {
        options.background = background;
    }
    if let Some(width) = args.width {
        options.width = width;
    }
    if let Some(margin) = args.margin {
        options.margin = margin;
    }
    if let Some(ec) = args.ec {
        options.error_correction = ec;
    }

    let styled = args.shape.is_some() || args.eye.is_some() || args.eye_ball.is_some();
    if styled || args.exact_grid {
        let mut patterns = options.patterns.unwrap_or_default();
        if let Some(shape) = args.shape {
            patterns.shape_style = shape;
        }
        if let Some(eye) = args.eye {
            patterns.eye_style = eye;
        }
        if let Some(eye_ball) = args.eye_ball {
            patterns.eye_ball_style = eye_ball;
        }
        if args.exact_grid {
            patterns.grid = ModuleGrid::Exact;
        }
        options.patterns = Some(patterns);
    }
    Ok(options)
}

fn format_cmd(args: &RequestArgs) -> qrcraft::Result<()> {
    let request = build_request(args)?;
    println!("{}", format_payload(&request));
    Ok(())
}

fn generate_cmd(
    request: &RequestArgs,
    style: &StyleArgs,
    format: ExportFormat,
    logo: Option<&Path>,
    out_dir: &Path,
) -> qrcraft::Result<()> {
    let request = build_request(request)?;
    let mut generator = Generator::new(build_options(style)?);
    if let Some(path) = logo {
        generator = generator.with_logo(load_logo_file(path)?);
    }

    let artifact = generator.export(&request, format)?;
    let path = write_artifact(out_dir, &artifact.file_name, &artifact.bytes)?;
    println!("{} ({})", path.display(), artifact.format.mime_type());
    Ok(())
}

fn batch_cmd(input: &Path, out_dir: &Path) -> qrcraft::Result<()> {
    let text = read_batch_input(input)?;
    let report = generate_batch(&text, &BatchSettings::from_env())?;
    let path = write_artifact(out_dir, BATCH_ARCHIVE_NAME, &report.archive)?;
    println!("{} ({} QR codes)", path.display(), report.entries.len());
    Ok(())
}

fn restyle_cmd(
    image: &Path,
    style: ShapeStyle,
    color: Color,
    background: Color,
    out: &Path,
) -> qrcraft::Result<()> {
    let canvas = load_rgba(image)?;
    let restyled = qrcraft::restyle(&canvas, color, background, style);
    restyled.save(out)?;
    println!("{}", out.display());
    Ok(())
}
