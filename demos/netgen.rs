use diag0m2::DiagonalNet32;
use ndarray::Array2;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    use clap::{App, Arg};
    // Use `clap` to parse command-line arguments
    let matches = App::new("netgen")
        .about("Generates the points of a diagonal (0,m,2)-net")
        .arg(
            Arg::with_name("M")
                .help("Log2 of the number of points")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("tiles")
                .short("t")
                .long("tiles")
                .help("Generate a block of shifted tiles (even M only)")
                .takes_value(true)
                .number_of_values(2)
                .value_names(&["WIDTH", "HEIGHT"]),
        )
        .arg(
            Arg::with_name("format")
                .short("f")
                .long("format")
                .help("Set the output format")
                .takes_value(true)
                .possible_values(&["ascii", "svg", "json", "csv", "tsv"])
                .default_value("tsv"),
        )
        .arg(
            Arg::with_name("scale")
                .short("s")
                .long("scale")
                .help("Divide the coordinates by 2^M (csv, tsv and json only)"),
        )
        .get_matches();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let m: u32 = matches
        .value_of("M")
        .and_then(|x| x.parse().ok())
        .expect("Invalid resolution");

    let tiles: [u32; 2] = match matches.values_of("tiles") {
        Some(values) => {
            let values: Vec<u32> = values
                .map(|x| x.parse().expect("Invalid tile count"))
                .collect();
            [values[0], values[1]]
        }
        None => [1, 1],
    };
    let tiled = matches.is_present("tiles");

    let net = DiagonalNet32::new(m)?;
    let n = net.n();

    let mut points: Vec<[u32; 2]> = Vec::with_capacity(n as usize * (tiles[0] * tiles[1]) as usize);
    if tiled {
        for py in 0..tiles[1] {
            for px in 0..tiles[0] {
                points.extend(net.tile(px, py)?);
            }
        }
    } else {
        points.extend(net.iter());
    }

    let [size_w, size_h] = [tiles[0] * n, tiles[1] * n];
    let scale = 1.0 / f64::from(n);
    let fmt_coord = |c: u32| -> String {
        if matches.is_present("scale") {
            format!("{}", f64::from(c) * scale)
        } else {
            format!("{}", c)
        }
    };

    let format = matches.value_of("format").unwrap();

    if format == "ascii" {
        // Rows are printed top to bottom, so +Y is flipped to point up
        let mut grid: Array2<char> = Array2::from_elem((size_h as usize, size_w as usize), '.');
        for &[x, y] in &points {
            grid[[(size_h - 1 - y) as usize, x as usize]] = '#';
        }
        for row in grid.genrows() {
            let s: String = row.iter().cloned().collect();
            println!("{}", s);
        }
    } else if format == "json" {
        println!("[");
        let mut iter = points.iter().peekable();
        while let Some(&[x, y]) = iter.next() {
            if iter.peek().is_some() {
                println!("  [{}, {}],", fmt_coord(x), fmt_coord(y));
            } else {
                println!("  [{}, {}]", fmt_coord(x), fmt_coord(y));
            }
        }
        println!("]");
    } else if format == "csv" {
        for &[x, y] in &points {
            println!("{}, {}", fmt_coord(x), fmt_coord(y));
        }
    } else if format == "tsv" {
        for &[x, y] in &points {
            println!("{}\t{}", fmt_coord(x), fmt_coord(y));
        }
    } else if format == "svg" {
        const SCALE: u32 = 10;
        println!(r#"<?xml version="1.0" encoding="utf-8"?>"#);
        println!(
            r#"<svg version="1.1" xmlns="http://www.w3.org/2000/svg"
            xmlns:xlink="http://www.w3.org/1999/xlink" x="0px" y="0px"
            viewBox="0 0 {} {}">"#,
            size_w * SCALE,
            size_h * SCALE,
        );
        for py in 0..tiles[1] {
            for px in 0..tiles[0] {
                println!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="gray"/>"#,
                    px * n * SCALE,
                    (tiles[1] - 1 - py) * n * SCALE,
                    n * SCALE,
                    n * SCALE,
                );
            }
        }
        for &[x, y] in &points {
            println!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="black"/>"#,
                x * SCALE + SCALE / 2,
                (size_h - 1 - y) * SCALE + SCALE / 2,
                SCALE / 3,
            );
        }
        println!(r#"</svg>"#);
    }

    Ok(())
}
