use log::LevelFilter;
use sobel_bench::image::io::{load_grayscale_image, save_grayscale_u8, write_json_file};
use sobel_bench::{BenchmarkConfig, BenchmarkDriver};

fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config = BenchmarkConfig::default();
    let input = load_grayscale_image(&config.input)?;

    let driver = BenchmarkDriver::new(&config)?;
    let outcome = driver.run(&input)?;
    for line in outcome.report.lines() {
        println!("{line}");
    }

    save_grayscale_u8(&outcome.output, &config.output)?;
    if let Some(path) = &config.report_json {
        write_json_file(path, &outcome.report)?;
    }
    Ok(())
}
