#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::pedantic)]
#![allow(warnings)]

use linear_hashmap::{Error, LinearHashMap, LinearHashMapConfig};
use plotters::prelude::*;
use rand::Rng;
use std::collections::HashMap;

// Number of random keys inserted per run
const NUM_KEYS: usize = 200_000;
// Number of points recorded along each run
const NUM_SAMPLES: usize = 200;

// Split thresholds to compare, in percent
const THRESHOLDS: [usize; 3] = [70, 85, 95];

#[derive(Debug, Clone, Copy)]
struct Sample {
    items: usize,
    buckets: usize,
    load_percent: usize,
    longest_chain: usize,
    // Mean number of entries scanned by a successful lookup
    mean_scan: f64,
}

fn sample_of(map: &LinearHashMap<u64, ()>) -> Sample {
    let lengths: Vec<usize> = map.bucket_lengths().collect();
    let longest_chain = lengths.iter().copied().max().unwrap_or(0);
    // A chain of length l costs 1 + 2 + ... + l probes over its l keys
    let total_scan: usize = lengths.iter().map(|&l| l * (l + 1) / 2).sum();
    let mean_scan =
        if map.is_empty() { 0.0 } else { total_scan as f64 / map.item_count() as f64 };

    Sample {
        items: map.item_count(),
        buckets: map.bucket_count(),
        load_percent: map.load_factor_percent(),
        longest_chain,
        mean_scan,
    }
}

fn profile(keys: &[u64], threshold: usize) -> Result<Vec<Sample>, Error> {
    let config = LinearHashMapConfig::default().with_load_factor_threshold_percent(threshold);
    let mut map = LinearHashMap::with_config(config);
    let every = (keys.len() / NUM_SAMPLES).max(1);
    let mut samples = Vec::with_capacity(NUM_SAMPLES + 1);

    for (i, &key) in keys.iter().enumerate() {
        match map.insert(key, ()) {
            // Random keys can repeat
            Ok(()) | Err(Error::DuplicateKey) => {}
            Err(error) => return Err(error),
        }
        if (i + 1) % every == 0 {
            samples.push(sample_of(&map));
        }
    }

    Ok(samples)
}

// Bucket capacity of the standard library map after each sampled insert, for comparison
fn std_capacities(keys: &[u64]) -> Vec<(usize, usize)> {
    let mut map = HashMap::new();
    let every = (keys.len() / NUM_SAMPLES).max(1);
    let mut capacities = Vec::with_capacity(NUM_SAMPLES + 1);

    for (i, &key) in keys.iter().enumerate() {
        map.insert(key, ());
        if (i + 1) % every == 0 {
            capacities.push((map.len(), map.capacity()));
        }
    }

    capacities
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();
    let keys: Vec<u64> = (0..NUM_KEYS).map(|_| rng.random::<u64>()).collect();

    let mut runs: Vec<(usize, Vec<Sample>)> = Vec::with_capacity(THRESHOLDS.len());
    for &threshold in &THRESHOLDS {
        let samples = profile(&keys, threshold)?;
        if let Some(last) = samples.last() {
            println!(
                "threshold {}%: {} items in {} buckets, load {}%, longest chain {}, mean scan {:.2}",
                threshold,
                last.items,
                last.buckets,
                last.load_percent,
                last.longest_chain,
                last.mean_scan
            );
        }
        runs.push((threshold, samples));
    }
    let std_runs = std_capacities(&keys);

    let font_family = "sans-serif";
    let colors = [
        RGBColor(220, 50, 50),  // Bright red
        RGBColor(50, 90, 220),  // Bright blue
        RGBColor(50, 180, 50),  // Bright green
        RGBColor(180, 50, 180), // Bright magenta
    ];
    let line_width = 2;
    let text_size = 16;
    let title_size = 35;

    // Plot 1: bucket growth, incremental splitting against doubling
    let root = BitMapBackend::new("bucket_growth.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_buckets = runs
        .iter()
        .flat_map(|(_, samples)| samples.iter().map(|s| s.buckets))
        .chain(std_runs.iter().map(|&(_, capacity)| capacity))
        .max()
        .unwrap_or(1) as f64 *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption("Bucket Growth: Linear Hashing vs Doubling", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(0..NUM_KEYS, 0.0..max_buckets)?;

    chart
        .configure_mesh()
        .x_desc("Number of Keys Inserted")
        .y_desc("Buckets")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for (run_idx, (threshold, samples)) in runs.iter().enumerate() {
        let line_style = ShapeStyle::from(&colors[run_idx % colors.len()]).stroke_width(line_width);
        chart
            .draw_series(LineSeries::new(
                samples.iter().map(|s| (s.items, s.buckets as f64)),
                line_style,
            ))?
            .label(format!("Linear hashing, split above {threshold}%"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));
    }

    let std_style = ShapeStyle::from(&colors[3]).stroke_width(line_width);
    chart
        .draw_series(LineSeries::new(
            std_runs.iter().map(|&(items, capacity)| (items, capacity as f64)),
            std_style,
        ))?
        .label("std HashMap capacity")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], std_style));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    // Plot 2: load and chain length while the table grows
    let root = BitMapBackend::new("chain_length.png", (1200, 900)).into_drawing_area();
    root.fill(&WHITE)?;
    let areas = root.split_evenly((2, 1));

    let mut load_chart = ChartBuilder::on(&areas[0])
        .caption("Load Factor", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..NUM_KEYS, 0.0..110.0)?;

    load_chart
        .configure_mesh()
        .x_desc("Number of Keys Inserted")
        .y_desc("Load (%)")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for (run_idx, (threshold, samples)) in runs.iter().enumerate() {
        let line_style = ShapeStyle::from(&colors[run_idx % colors.len()]).stroke_width(line_width);
        load_chart
            .draw_series(LineSeries::new(
                samples.iter().map(|s| (s.items, s.load_percent as f64)),
                line_style,
            ))?
            .label(format!("split above {threshold}%"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));
    }

    load_chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::LowerRight)
        .draw()?;

    let max_chain = runs
        .iter()
        .flat_map(|(_, samples)| samples.iter().map(|s| s.longest_chain))
        .max()
        .unwrap_or(1) as f64 *
        1.1;

    let mut chain_chart = ChartBuilder::on(&areas[1])
        .caption("Longest Chain and Mean Lookup Scan", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..NUM_KEYS, 0.0..max_chain)?;

    chain_chart
        .configure_mesh()
        .x_desc("Number of Keys Inserted")
        .y_desc("Entries")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for (run_idx, (threshold, samples)) in runs.iter().enumerate() {
        let color = &colors[run_idx % colors.len()];
        let longest_style = ShapeStyle::from(color).stroke_width(line_width);
        let scan_style = ShapeStyle::from(&color.mix(0.5)).stroke_width(1);

        chain_chart
            .draw_series(LineSeries::new(
                samples.iter().map(|s| (s.items, s.longest_chain as f64)),
                longest_style,
            ))?
            .label(format!("longest chain, split above {threshold}%"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], longest_style));

        chain_chart
            .draw_series(LineSeries::new(samples.iter().map(|s| (s.items, s.mean_scan)), scan_style))?
            .label(format!("mean scan, split above {threshold}%"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], scan_style));
    }

    chain_chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    println!("Generated plot images: bucket_growth.png, chain_length.png");

    Ok(())
}
