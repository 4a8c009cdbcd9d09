// main.rs - CLI entry point

use std::time::Instant;

use mitscore::cli::Config;
use mitscore::prelude::*;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let validation = validate_args(&args)?;

    println!("🚀 mitscore v{}", mitscore::VERSION);
    println!(
        "🕒 Started: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("🧵 Threads: {}", n);
    } else {
        println!("🧵 Threads: {} (auto-detected)", rayon::current_num_threads());
    }

    let alphabet = &validation.alphabet;
    println!(
        "🧬 Processing as {} sequences ({} symbols)",
        validation.sequence_type.description(),
        alphabet.len()
    );

    let total_start = Instant::now();

    // Load alignments
    let msa1 = AlignedSequenceSet::from_fasta(&validation.msa1)?;
    println!(
        "📂 MSA1: {} sequences × {} positions ({})",
        msa1.len(),
        msa1.width(),
        validation.msa1.display()
    );
    let matrix1 = msa1.position_matrix();

    let matrix2_owned = match &validation.msa2 {
        Some(path) => {
            let msa2 = AlignedSequenceSet::from_fasta(path)?;
            println!(
                "📂 MSA2: {} sequences × {} positions ({})",
                msa2.len(),
                msa2.width(),
                path.display()
            );
            Some(msa2.position_matrix())
        }
        None => {
            println!("🔁 No second MSA provided, using the first MSA for both inputs to calculate MIT on itself.");
            None
        }
    };
    let matrix2 = matrix2_owned.as_ref().unwrap_or(&matrix1);

    // Handle stats-only mode
    if args.stats_only {
        println!("\n📈 === ALIGNMENT STATISTICS ===");
        print_summary("MSA1", &matrix1.summary(alphabet));
        if let Some(matrix) = &matrix2_owned {
            print_summary("MSA2", &matrix.summary(alphabet));
        }
        println!("\n✅ Statistics analysis completed");
        return Ok(());
    }

    if args.dry_run {
        check_sample_counts(&matrix1, matrix2)?;
        println!("✅ Dry run completed successfully");
        println!(
            "📊 Would score {} × {} = {} position pairs",
            matrix1.width(),
            matrix2.width(),
            matrix1.width() * matrix2.width()
        );
        return Ok(());
    }

    let output_dir = validation
        .output_dir
        .as_ref()
        .ok_or("--output is required")?;

    // Score every position pair
    println!("\n🔄 Computing MIT scores...");
    let compute_start = Instant::now();
    let table = calculate_mit_table(&matrix1, matrix2, alphabet, true)?;
    let compute_elapsed = compute_start.elapsed();
    println!(
        "✅ {} position pairs scored in {:.2}s ({:.0} pairs/sec)",
        table.len(),
        compute_elapsed.as_secs_f64(),
        table.len() as f64 / compute_elapsed.as_secs_f64().max(1e-9)
    );

    let output_path = write_results(output_dir, validation.format, &table)?;
    println!("✅ Results written to: {}", output_path.display());

    if args.top > 0 {
        let self_comparison = matrix2_owned.is_none();
        let top = table.top_pairs(args.top, self_comparison);
        println!(
            "\n🏆 Top {} position pairs{}:",
            top.len(),
            if self_comparison { " (self pairs excluded)" } else { "" }
        );
        for record in &top {
            println!(
                "   {:>6} × {:<6} {:.6}",
                record.position1, record.position2, record.score
            );
        }
    }

    // Print summary
    let total_elapsed = total_start.elapsed();
    println!("\n🎉 === MITSCORE COMPLETED SUCCESSFULLY ===");
    println!(
        "⏱️  Total execution time: {:.2}s",
        total_elapsed.as_secs_f64()
    );
    println!(
        "📊 Final table: {} × {} positions",
        table.dimensions().0,
        table.dimensions().1
    );
    println!("📁 Output written to: {}", output_path.display());
    println!("🔧 Command: {}", command_line);

    Ok(())
}

fn print_summary(label: &str, summary: &AlignmentSummary) {
    println!("🧬 {}:", label);
    println!("  • Samples: {}", summary.samples);
    println!("  • Positions: {}", summary.width);
    println!(
        "  • Missing data: {:.2}%",
        summary.missing_fraction * 100.0
    );
    println!(
        "  • Invariant positions: {} ({} entirely missing)",
        summary.invariant_positions, summary.all_missing_positions
    );
    println!(
        "  • Mean position entropy: {:.3} (max {:.3})",
        summary.mean_entropy, summary.max_entropy
    );
}
