mod common;

use common::synthetic_image::{checkerboard, noise, uniform, vertical_step};
use sobel_bench::{BenchmarkConfig, BenchmarkDriver, ParallelDispatcher, SampleBuffer};

fn dispatch(input: &SampleBuffer, threads: usize) -> SampleBuffer {
    let mut output = input.zeros_like();
    ParallelDispatcher::new(threads)
        .expect("dispatcher")
        .dispatch(input, &mut output)
        .expect("dispatch");
    output
}

#[test]
fn single_pixel_image_is_zero() {
    let output = dispatch(&uniform(1, 1, 255), 1);
    assert_eq!(output.as_raw(), &[0]);
}

#[test]
fn uniform_image_is_flat_inside_and_truncated_on_border() {
    let input = uniform(4, 4, 128);
    let output = dispatch(&input, 2);
    assert!(output.same_shape(&input));
    for r in 1..3 {
        for c in 1..3 {
            assert_eq!(output.get(r, c), 0, "interior ({r}, {c})");
        }
    }
    // skipped neighbours leave an unbalanced kernel on every border pixel
    for i in 0..4 {
        assert_eq!(output.get(0, i), 255);
        assert_eq!(output.get(3, i), 255);
        assert_eq!(output.get(i, 0), 255);
        assert_eq!(output.get(i, 3), 255);
    }
}

#[test]
fn black_image_stays_black() {
    let output = dispatch(&uniform(6, 9, 0), 4);
    assert!(output.as_raw().iter().all(|&v| v == 0));
}

#[test]
fn vertical_step_edge_responds_at_step_columns() {
    let input = vertical_step(4, 4, 2, 0, 255);
    let output = dispatch(&input, 1);
    for r in 0..4 {
        // uniform dark column with no bright neighbour
        assert_eq!(output.get(r, 0), 0, "row {r}");
        // both sides of the step saturate
        assert_eq!(output.get(r, 1), 255, "row {r}");
        assert_eq!(output.get(r, 2), 255, "row {r}");
        // bright border column loses its right-hand neighbours
        assert_eq!(output.get(r, 3), 255, "row {r}");
    }
}

#[test]
fn wide_step_is_quiet_away_from_the_edge() {
    let input = vertical_step(6, 10, 5, 0, 255);
    let output = dispatch(&input, 3);
    for r in 1..5 {
        for c in [0, 1, 2, 3, 6, 7, 8] {
            assert_eq!(output.get(r, c), 0, "({r}, {c})");
        }
        assert_eq!(output.get(r, 4), 255);
        assert_eq!(output.get(r, 5), 255);
    }
}

#[test]
fn output_is_independent_of_thread_count() {
    let input = noise(67, 45, 0xC0FFEE);
    let reference = dispatch(&input, 1);
    for threads in [2, 3, 4, 7, 8, 16, 32, 67] {
        assert_eq!(dispatch(&input, threads), reference, "threads={threads}");
    }
}

#[test]
fn sweep_with_one_and_eight_threads_is_byte_identical() {
    let input = checkerboard(120, 90, 8);
    let run = |counts: Vec<usize>| {
        let config = BenchmarkConfig {
            thread_counts: counts,
            ..Default::default()
        };
        BenchmarkDriver::new(&config)
            .expect("driver")
            .run(&input)
            .expect("sweep")
    };
    let single = run(vec![1]);
    let eight = run(vec![8]);
    assert_eq!(single.output.as_raw(), eight.output.as_raw());
}

#[test]
fn default_sweep_covers_more_threads_than_rows() {
    let _ = env_logger::builder().is_test(true).try_init();
    let input = noise(10, 12, 7);
    let driver = BenchmarkDriver::new(&BenchmarkConfig::default()).expect("driver");
    let outcome = driver.run(&input).expect("sweep");

    let counts: Vec<usize> = outcome.report.trials.iter().map(|t| t.thread_count).collect();
    assert_eq!(counts, sobel_bench::THREAD_COUNTS.to_vec());
    assert_eq!(outcome.output, dispatch(&input, 1));
    assert_eq!(outcome.report.lines().count(), 6);
}
