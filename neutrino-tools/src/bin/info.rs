use std::{path::PathBuf, time::Instant};

use anyhow::Result;
use clap::{App, Arg};
use neutrino_algorithms::bounds::{calculate_bounds, calculate_group_bounds};
use neutrino_core::mesh::{Mesh, MeshProvider};
use neutrino_io::base::{GenericMeshReader, MeshReader};

struct Args {
    pub input_file: PathBuf,
    pub detailed: bool,
}

fn get_args() -> Result<Args> {
    let matches = App::new("neutrino info")
        .version("0.1")
        .about("Prints information about the given mesh file")
        .arg(
            Arg::with_name("INPUT")
                .short("i")
                .takes_value(true)
                .value_name("INPUT")
                .help("Input mesh file")
                .required(true),
        )
        .arg(
            Arg::with_name("DETAILED")
                .short("d")
                .long("detailed")
                .help("Output a detailed analysis of the mesh, showing node counts and bounds of all physical groups"),
        )
        .get_matches();

    let input_file = PathBuf::from(matches.value_of("INPUT").unwrap());
    let detailed = matches.is_present("DETAILED");

    Ok(Args {
        input_file,
        detailed,
    })
}

fn print_physical_groups(mesh: &Mesh) {
    println!("Physical groups");
    for (dimension, tag) in mesh.physical_groups() {
        let name = mesh.physical_name(dimension, tag).unwrap_or("<unnamed>");
        let node_count = mesh
            .nodes_for_physical_group(dimension, tag)
            .map(|nodes| nodes.len())
            .unwrap_or_default();
        print!("\t({}, {}) {}: {} nodes", dimension, tag, name, node_count);
        match calculate_group_bounds(mesh, dimension, tag) {
            Some(bounds) => println!(", bounds {}", bounds),
            None => println!(),
        }
    }
}

fn analyze_mesh(mesh: &Mesh) {
    let t_start = Instant::now();
    println!("Analyzing physical groups...");
    print_physical_groups(mesh);
    if !mesh.has_contiguous_node_tags() {
        println!("Node tags are not contiguous, use `neighbours --renumber` to build neighbour graphs");
    }
    println!("Took {:.2}s", t_start.elapsed().as_secs_f64());
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = get_args()?;
    let mut reader = GenericMeshReader::open_file(&args.input_file)?;
    let mesh = reader.read()?;
    println!("neutrino info report for {}", args.input_file.display());
    println!("{}", reader.get_metadata());
    println!("{}", mesh.summary());
    if let Some(bounds) = calculate_bounds(&mesh) {
        println!("Bounds: {}", bounds);
    }

    if args.detailed {
        analyze_mesh(&mesh);
    }

    Ok(())
}
