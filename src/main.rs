mod cli;

use anyhow::Result;
use clap::Parser;
use log::info;
use std::fs::File;

use crate::cli::{Cli, ClassifyCommand, Commands, InspectCommand, KmersCommand, SweepCommand, VoteOptions};
use spectrum_knn::io::{FastaFile, ReportWriter};
use spectrum_knn::sweep::{read_sequences, run_configuration, Sweep};
use spectrum_knn::{ClassifierConfig, Representation, Scoring};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(log_file) = cli.log_file {
        let file = File::create(log_file)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    match cli.command {
        Commands::Classify(cmd) => handle_classify_command(cmd)?,
        Commands::Sweep(cmd) => handle_sweep_command(cmd)?,
        Commands::Inspect(cmd) => handle_inspect_command(cmd)?,
        Commands::Kmers(cmd) => handle_kmers_command(cmd)?,
    }

    Ok(())
}

fn scoring(vote: &VoteOptions) -> Scoring {
    if vote.sparse { Scoring::Sparse } else { Scoring::PerPair }
}

fn handle_classify_command(cmd: ClassifyCommand) -> Result<()> {
    let train = read_sequences(&cmd.train)?;
    let test = read_sequences(&cmd.test)?;

    let config = ClassifierConfig::new(cmd.neighbors)
        .with_tie_break(cmd.vote.tie_break())
        .with_scoring(scoring(&cmd.vote));
    let report = run_configuration(train, test, cmd.kmer_size, config)?;

    let mut writer = match &cmd.output {
        Some(path) => ReportWriter::append(path, cmd.vote.format.into())?,
        None => ReportWriter::stdout(cmd.vote.format.into())?,
    };
    writer.write(&report)?;
    Ok(())
}

fn handle_sweep_command(cmd: SweepCommand) -> Result<()> {
    let sweep = Sweep {
        tie_break: cmd.vote.tie_break(),
        scoring: scoring(&cmd.vote),
        train: cmd.train,
        test: cmd.test,
        kmer_sizes: cmd.kmer_sizes,
        neighbors: cmd.neighbors,
    };
    sweep.write(&cmd.output, cmd.vote.format.into())?;
    Ok(())
}

fn handle_inspect_command(cmd: InspectCommand) -> Result<()> {
    let rep: Representation = cmd.format.into();
    for mut seq in read_sequences(&cmd.input)? {
        if rep == Representation::Kmers {
            seq.build_kmers(cmd.kmer_size)?;
        }
        println!("{}", seq.id());
        println!("{}", seq.render(rep));
    }
    Ok(())
}

fn handle_kmers_command(cmd: KmersCommand) -> Result<()> {
    let kmers = FastaFile::new(&cmd.input).distinct_kmers(cmd.kmer_size)?;
    info!("Found {} distinct k-mers in {}", kmers.len(), cmd.input.display());
    for kmer in kmers {
        println!("{}", kmer);
    }
    Ok(())
}
