use clap::Parser;
use gifstitch::config::{DEFAULT_FRAMERATE, DEFAULT_SCALE, GifConfig, parse_scale_arg};
use gifstitch::{output, process};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(name = "gifstitch")]
#[command(about = "Stitch still images into a looping animated GIF")]
#[command(long_about = "\
Stitch still images into a looping animated GIF

Every file matching --input becomes one frame, in filename order. Frames are
resized to a common canvas and shown for 100/framerate hundredths of a second
each.

Scale syntax (W*H):

  -1*-1     canvas = widest x tallest input (default)
  64*64     fixed 64x64 canvas
  320*-1    fixed width, height = tallest input

Examples:

  gifstitch -i 'frames/*.png' -o anim.gif
  gifstitch -f 10 -s 256*256 -i 'shots/shot_??.jpg' -o anim.gif")]
#[command(version)]
struct Cli {
    /// Frames per second (1-100); each frame shows for 100/framerate centiseconds
    #[arg(short, long, default_value_t = DEFAULT_FRAMERATE, value_parser = clap::value_parser!(u32).range(1..))]
    framerate: u32,

    /// Canvas size as W*H; -1 on an axis sizes it from the inputs
    #[arg(
        short,
        long,
        default_value = DEFAULT_SCALE,
        allow_hyphen_values = true,
        value_parser = parse_scale_arg
    )]
    scale: String,

    /// Input images: a directory plus filename glob, e.g. 'frames/*.png'
    #[arg(short, long)]
    input: String,

    /// Output GIF path
    #[arg(short, long)]
    output: PathBuf,

    /// Log pipeline diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = GifConfig::new(cli.framerate, &cli.scale, &cli.input, cli.output);
    output::print_config(&config);

    match process::process(&config, |event| output::print_progress_event(&event)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&err);
            ExitCode::from(err.exit_code())
        }
    }
}

/// Diagnostics go to stderr so stdout stays the plain progress transcript.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
