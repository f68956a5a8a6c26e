use std::{fs::File, io::BufWriter, path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::{App, Arg};
use log::{info, warn};
use neutrino_algorithms::neighbourhood::{
    NeighbourGraph, NeighbourGraphBuilder, NeighbourhoodParams,
};
use neutrino_core::mesh::{element_properties, element_types};
use neutrino_io::base::read_mesh;

struct Args {
    pub input_file: PathBuf,
    pub output_file: Option<PathBuf>,
    pub group_tag: i32,
    pub group_dimension: i32,
    pub element_type: i32,
    pub renumber: bool,
    pub strict: bool,
}

fn get_args() -> Result<Args> {
    let matches = App::new("neutrino neighbours")
        .version("0.1")
        .about("Builds the neighbour graph of a physical group and prints statistics about it")
        .arg(
            Arg::with_name("INPUT")
                .short("i")
                .takes_value(true)
                .value_name("INPUT")
                .help("Input mesh file")
                .required(true),
        )
        .arg(
            Arg::with_name("GROUP")
                .short("g")
                .long("group")
                .takes_value(true)
                .value_name("TAG")
                .help("Tag of the physical group")
                .required(true),
        )
        .arg(
            Arg::with_name("DIMENSION")
                .short("d")
                .long("dimension")
                .takes_value(true)
                .value_name("DIM")
                .help("Dimension of the physical group")
                .required(true),
        )
        .arg(
            Arg::with_name("TYPE")
                .short("t")
                .long("type")
                .takes_value(true)
                .value_name("TYPE")
                .help("Gmsh element type code, 2 for 3-node triangles, 4 for 4-node tetrahedra")
                .required(true),
        )
        .arg(
            Arg::with_name("RENUMBER")
                .long("renumber")
                .help("Renumber node and element tags to 1..=n before building the graph"),
        )
        .arg(
            Arg::with_name("STRICT")
                .long("strict")
                .help("Fail on elements that list the same node more than once"),
        )
        .arg(
            Arg::with_name("OUTPUT")
                .short("o")
                .takes_value(true)
                .value_name("OUTPUT")
                .help("Write the neighbour graph as JSON to this file"),
        )
        .get_matches();

    let parse_number = |name: &str| -> Result<i32> {
        let value = matches.value_of(name).unwrap();
        value
            .parse()
            .with_context(|| format!("Invalid value '{}' for {}", value, name))
    };

    Ok(Args {
        input_file: PathBuf::from(matches.value_of("INPUT").unwrap()),
        output_file: matches.value_of("OUTPUT").map(PathBuf::from),
        group_tag: parse_number("GROUP")?,
        group_dimension: parse_number("DIMENSION")?,
        element_type: parse_number("TYPE")?,
        renumber: matches.is_present("RENUMBER"),
        strict: matches.is_present("STRICT"),
    })
}

fn print_statistics(graph: &NeighbourGraph) {
    println!("Buffers");
    for (name, bytes) in graph.upload_buffers().iter() {
        println!("\t{:<18} {:>10} bytes", name, bytes.len());
    }

    let neighbour_counts = (0..graph.node_count())
        .map(|i| graph.neighbours_of(i).len())
        .collect::<Vec<_>>();
    if let (Some(min), Some(max)) = (
        neighbour_counts.iter().min(),
        neighbour_counts.iter().max(),
    ) {
        let mean = graph.neighbour().len() as f64 / graph.node_count() as f64;
        println!("Neighbours per node: min {}, max {}, mean {:.2}", min, max, mean);
    }

    let lengths = graph.neighbour_length();
    if !lengths.is_empty() {
        let min = lengths.iter().copied().fold(f32::INFINITY, f32::min);
        let max = lengths.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        println!("Link length: min {}, max {}", min, max);
    }
    let isolated = neighbour_counts.iter().filter(|count| **count == 0).count();
    if isolated > 0 {
        println!("{} group nodes have no neighbours", isolated);
    }
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = get_args()?;
    let mut mesh = read_mesh(&args.input_file)?;
    if args.renumber {
        mesh.renumber().context("Could not renumber mesh tags")?;
    } else if !mesh.has_contiguous_node_tags() {
        warn!("Node tags of {} are not contiguous, consider --renumber", args.input_file.display());
    }

    let type_name = element_properties(args.element_type)
        .map(|properties| properties.name)
        .unwrap_or_else(|| "unknown".to_owned());
    if args.element_type == element_types::POINT {
        warn!("Point elements have no neighbours");
    }

    let params = if args.strict {
        NeighbourhoodParams::strict()
    } else {
        NeighbourhoodParams::default()
    };

    let t_start = Instant::now();
    let mut builder = NeighbourGraphBuilder::new(&mesh).with_params(params);
    let graph = builder
        .process(args.group_tag, args.group_dimension, args.element_type)
        .with_context(|| {
            format!(
                "Could not build neighbour graph of group ({}, {}) with elements of type {} ({})",
                args.group_dimension, args.group_tag, args.element_type, type_name
            )
        })?;
    info!("Built neighbour graph in {:.2}s", t_start.elapsed().as_secs_f64());

    println!(
        "Group ({}, {}): {} nodes, {} elements of type {} ({})",
        args.group_dimension,
        args.group_tag,
        graph.node_count(),
        graph.element_count(),
        args.element_type,
        type_name
    );
    print_statistics(graph);

    if let Some(output_file) = &args.output_file {
        let writer = BufWriter::new(File::create(output_file).with_context(|| {
            format!("Could not create output file {}", output_file.display())
        })?);
        serde_json::to_writer(writer, graph).context("Could not write neighbour graph")?;
        println!("Wrote neighbour graph to {}", output_file.display());
    }

    Ok(())
}
