use blockcopy::{Buffer, Strategy, BUFFER_LEN};
use env_logger::Env;
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let source = Buffer::<i32>::sequential(BUFFER_LEN);
    let mut destination = Buffer::<i32>::zeroed(BUFFER_LEN);
    info!("allocated two buffers of {:#x} elements", BUFFER_LEN);

    for strategy in Strategy::ALL {
        destination.fill(0);
        strategy.copy(&mut destination, &source)?;
        info!("{}: moved {} elements", strategy, destination.len());
    }

    Ok(())
}
