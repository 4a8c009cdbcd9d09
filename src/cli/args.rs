// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// mitscore - Mutual information (MIT) scores between alignment positions
pub struct Args {
    /// multiple sequence alignment file in FASTA format
    #[argh(option)]
    pub msa1: Option<String>,

    /// second alignment in FASTA format, sample-aligned with --msa1 (default: score --msa1 against itself)
    #[argh(option)]
    pub msa2: Option<String>,

    /// output directory; results are written to <output>/mit_results.<format>
    #[argh(option)]
    pub output: Option<String>,

    /// sequence type: A for amino acid, N for nucleic acid (default: A)
    #[argh(option, default = "String::from(\"A\")")]
    pub seq_type: String,

    /// output format: csv, tsv, json (default: csv)
    #[argh(option, default = "String::from(\"csv\")")]
    pub format: String,

    /// number of threads (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// show alignment statistics only, then exit
    #[argh(switch)]
    pub stats_only: bool,

    /// validate inputs without computation (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// number of top scoring position pairs to report on the console (default: 10)
    #[argh(option, default = "10")]
    pub top: usize,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
