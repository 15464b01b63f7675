use argh::FromArgs;

use dtl::ops::{correlate2d_with, transpose2d, window1d, ExecutionStrategy, WindowSpec};
use dtl::tensor::Tensor2;

#[derive(FromArgs, Debug)]
/// Run the dtl shape-transforming operations on numbers given on the command line.
struct Args {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Command {
    Window(WindowArgs),
    Correlate(CorrelateArgs),
    Transpose(TransposeArgs),
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "window")]
/// Extract strided sliding windows from a sequence.
struct WindowArgs {
    /// comma-separated sequence, e.g. 1,2,3,4
    #[argh(option, short = 'd')]
    data: String,

    /// number of consecutive elements per window
    #[argh(option, short = 's')]
    size: usize,

    /// distance between window starts
    #[argh(option, default = "1")]
    shift: usize,

    /// subsampling step inside a window
    #[argh(option, default = "1")]
    stride: usize,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "correlate")]
/// Valid-mode 2-D cross-correlation of a matrix with a kernel.
struct CorrelateArgs {
    /// matrix rows separated by ';', e.g. "1,2;3,4"
    #[argh(option, short = 'm')]
    matrix: String,

    /// kernel rows separated by ';'
    #[argh(option, short = 'k')]
    kernel: String,

    /// step between kernel positions
    #[argh(option, default = "1")]
    stride: usize,

    /// number of threads, 0 to run on the current thread
    #[argh(option, short = 'n', default = "0")]
    num_threads: usize,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "transpose")]
/// Transpose a matrix.
struct TransposeArgs {
    /// matrix rows separated by ';'
    #[argh(option, short = 'm')]
    matrix: String,
}

fn parse_sequence(text: &str) -> Result<Vec<f64>, std::num::ParseFloatError> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

fn parse_matrix(text: &str) -> Result<Tensor2<f64>, Box<dyn std::error::Error>> {
    let rows = text
        .split(';')
        .filter(|r| !r.trim().is_empty())
        .map(parse_sequence)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Tensor2::from_rows(&rows)?)
}

fn print_matrix(matrix: &Tensor2<f64>) {
    for row in matrix.to_rows() {
        let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        println!("{}", cells.join(", "));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    match args.command {
        Command::Window(args) => {
            let data = parse_sequence(&args.data)?;
            let spec = WindowSpec::new(args.size)
                .with_shift(args.shift)
                .with_stride(args.stride);
            log::info!("windowing {} elements with {spec:?}", data.len());

            let windows = window1d(&data, spec)?;
            println!("{} windows", windows.len());
            for window in windows {
                println!("{window:?}");
            }
        }
        Command::Correlate(args) => {
            let matrix = parse_matrix(&args.matrix)?;
            let kernel = parse_matrix(&args.kernel)?;
            let strategy = match args.num_threads {
                0 => ExecutionStrategy::Serial,
                n => ExecutionStrategy::Fixed(n),
            };
            log::info!(
                "correlating {:?} with {:?} using {strategy:?}",
                matrix.shape,
                kernel.shape
            );

            let out = correlate2d_with(&matrix, &kernel, args.stride, strategy)?;
            println!("shape {:?}", out.shape);
            print_matrix(&out);
        }
        Command::Transpose(args) => {
            let matrix = parse_matrix(&args.matrix)?;
            let out = transpose2d(&matrix);
            println!("shape {:?}", out.shape);
            print_matrix(&out);
        }
    }

    Ok(())
}
