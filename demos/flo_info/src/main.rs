use argh::FromArgs;
use std::path::PathBuf;

use optflow::io::flo::read_flo;

#[derive(FromArgs)]
/// Inspect a Middlebury .flo optical-flow file
struct Args {
    /// path to an input .flo file
    #[argh(option, short = 'i')]
    flow_path: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    // read the flow field
    let flow = read_flo(&args.flow_path)?;
    log::debug!("decoded {} samples", flow.as_slice().len());

    let size = flow.size();
    let num_cells = size.width * size.height;

    // summarize the displacement magnitudes
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    let mut sum = 0.0f64;
    for (_, _, (u, v)) in flow.iter() {
        let magnitude = (u * u + v * v).sqrt();
        min = min.min(magnitude);
        max = max.max(magnitude);
        sum += magnitude as f64;
    }

    println!("{}: {}", args.flow_path.display(), size);
    println!(
        "flow magnitude: min {:.3}, mean {:.3}, max {:.3}",
        min,
        sum / num_cells as f64,
        max
    );

    Ok(())
}
