//! an executable computing the (k,s) Weisfeiler-Leman kernel of a graph dataset
//! example usage:
//! kswl --dir "/home/data/TUDataset/MUTAG" --name MUTAG -k 3 -s 2 --nodelabels --nbiter 4 --normalize --out mutag
//! kswl --random 100 --seed 17 -k 2 -s 1 --nbiter 3 --builder naive --out random
//! kswl --dir "/home/data/TUDataset/MUTAG" --name MUTAG --plain --nbiter 5 --out mutag_wl
//!
//! The Gram matrix is dumped in PREFIX_gram.csv and a per graph summary (with classes) in PREFIX_summary.csv,
//! to be used by an external classifier.
//! Logging is controlled by RUST_LOG.



use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::{Arg, ArgMatches, Command, arg};

use kswl::prelude::*;
use kswl::tools::generator::RandomGraphGenerator;


// where graphs come from
enum GraphSource {
    Dataset(PathBuf, String),
    Random(usize, u64),
}


fn parse_source(matches : &ArgMatches) -> Result<GraphSource, anyhow::Error> {
    if let Some(dir) = matches.value_of("dir") {
        let name = matches.value_of("name").ok_or_else(|| anyhow!("--dir requires --name"))?;
        return Ok(GraphSource::Dataset(PathBuf::from(dir), String::from(name)));
    }
    match matches.value_of("random") {
        Some(str) => {
            let nb_graphs = str.parse::<usize>().with_context(|| format!("error parsing random : {}", str))?;
            let seed = match matches.value_of("seed") {
                Some(str) => str.parse::<u64>().with_context(|| format!("error parsing seed : {}", str))?,
                None => 4664397,
            };
            Ok(GraphSource::Random(nb_graphs, seed))
        },
        None => Err(anyhow!("give either --dir and --name or --random")),
    }
} // end of parse_source



fn parse_usize(matches : &ArgMatches, name : &str, default : usize) -> Result<usize, anyhow::Error> {
    match matches.value_of(name) {
        Some(str) => str.parse::<usize>().with_context(|| format!("error parsing {} : {}", name, str)),
        None => Ok(default),
    }
}


fn parse_params(matches : &ArgMatches) -> Result<(KernelParams, bool), anyhow::Error> {
    log::debug!("in parse_params");
    let k = parse_usize(matches, "k", 2)?;
    let s = parse_usize(matches, "s", 1)?;
    let enumeration = match matches.value_of("builder") {
        Some("naive") => Enumeration::Naive,
        Some("multiset") | None => Enumeration::Multiset,
        Some(other) => { return Err(anyhow!("builder must be naive or multiset, got {}", other)); },
    };
    let nb_iter = match matches.value_of("nbiter") {
        Some(str) => str.parse::<i64>().with_context(|| format!("error parsing nbiter : {}", str))?,
        None => 4,
    };
    let parallel = !matches.is_present("sequential");
    let wl = WlParams::from_signed(nb_iter, matches.is_present("cumulative"), parallel)?;
    let tuple = TupleGraphParams::new(k, s, matches.is_present("nodelabels"), enumeration);
    let params = KernelParams::new(tuple, wl, matches.is_present("normalize"));
    params.check()?;
    Ok((params, matches.is_present("plain")))
} // end of parse_params



fn load_graphs(source : &GraphSource) -> Result<GraphDataset, anyhow::Error> {
    match source {
        GraphSource::Dataset(dir, name) => {
            read_tu_dataset(dir, name).with_context(|| format!("cannot load dataset {} in {:?}", name, dir))
        },
        GraphSource::Random(nb_graphs, seed) => {
            log::info!("generating {} random graphs, seed : {}", nb_graphs, seed);
            let mut generator = RandomGraphGenerator::new(*seed);
            let graphs = generator.dataset(*nb_graphs, 5, 20, 0.2, 3);
            let classes = graphs.iter().map(|g| (g.get_nb_edges() % 2) as i64).collect();
            Ok(GraphDataset{graphs, classes})
        },
    }
} // end of load_graphs



pub fn main() -> Result<(), anyhow::Error> {
    //
    env_logger::Builder::from_default_env().init();
    log::info!("logger initialized");
    //
    let matches = Command::new("kswl")
        .arg_required_else_help(true)
        .arg(Arg::new("dir")
            .long("dir")
            .takes_value(true)
            .required(false)
            .help("directory of a TU dataset"))
        .arg(Arg::new("name")
            .long("name")
            .takes_value(true)
            .required(false)
            .help("name of the TU dataset, files are NAME_A.txt ..."))
        .arg(Arg::new("random")
            .long("random")
            .takes_value(true)
            .required(false)
            .help("number of random graphs to generate instead of loading a dataset"))
        .arg(Arg::new("k")
            .short('k')
            .takes_value(true)
            .help("length of tuples, default 2"))
        .arg(Arg::new("s")
            .short('s')
            .takes_value(true)
            .help("maximum number of components of a tuple, default 1"))
        .args(&[
            arg!(--seed [seed] "seed of random generation"),
            arg!(--nbiter [nbiter] "number of refinement rounds, default 4"),
            arg!(--builder [builder] "naive or multiset, default multiset"),
            arg!(-o --out <out> "prefix of output csv files"),
        ])
        .arg(Arg::new("nodelabels")
            .long("nodelabels")
            .help("atomic types use vertex labels"))
        .arg(Arg::new("cumulative")
            .long("cumulative")
            .help("features concatenate histograms of all rounds"))
        .arg(Arg::new("normalize")
            .long("normalize")
            .help("normalize the gram matrix"))
        .arg(Arg::new("sequential")
            .long("sequential")
            .help("disable parallelism"))
        .arg(Arg::new("plain")
            .long("plain")
            .help("plain Weisfeiler-Leman on base graphs, tuple options are ignored"))
    .get_matches();

    // decode args
    let source = parse_source(&matches)?;
    let (params, plain) = parse_params(&matches)?;
    let prefix = matches.value_of("out").ok_or_else(|| anyhow!("missing --out"))?;
    log::info!("kernel parameters : {:?}, plain : {}", params, plain);
    //
    let dataset = load_graphs(&source)?;
    let output = if plain {
        compute_plain_kernel(&dataset.graphs, &dataset.classes, params.wl, params.normalize)?
    }
    else {
        compute_kernel(&dataset.graphs, &dataset.classes, &params)?
    };
    log::info!("nb atomic types : {}, nb colors by round : {:?}", output.nb_atomic_types, output.nb_colors);
    //
    let gram_path = PathBuf::from(format!("{}_gram.csv", prefix));
    dump_gram_csv(&output.gram, &gram_path).with_context(|| format!("cannot dump {:?}", gram_path))?;
    let summary_path = PathBuf::from(format!("{}_summary.csv", prefix));
    dump_summary_csv(&output.summary, &summary_path).with_context(|| format!("cannot dump {:?}", summary_path))?;
    //
    Ok(())
} // end of main
